//! Builtin lexical tables.
//!
//! Static data only. [`LexicalResources::builtin`](crate::LexicalResources::builtin)
//! freezes these into lookup structures once.

/// Rare characters injected into texts to defeat naive comparison.
pub const NOISE_CHARS: &[char] = &[
    '丽', '医', '腥', '碉', '钡', '酝', '怆', '桀', '铐', '蹬',
    '髓', '镣', '瓤', '巍', '麝', '龌', '鬓', '魇', '鞑', '躐',
    '龘', '靐', '齉', '齾', '爩', '鱻', '麤', '龗', '灪', '吁',
    '龖', '厵', '滟', '爨', '癵', '驫', '麣', '纞', '虋', '讟',
    '钃', '鸜', '麷', '鞻', '韽', '韾', '顟', '顠', '饙', '騳',
    '騱', '骉', '鸙', '鸘', '黸', '鼺', '鼉', '黼', '黻', '盱',
    '怸', '扅', '扆', '厶', '乸', '乿', '亄', '亹', '亾', '亽',
    '亼', '兛', '兞', '兝', '兡', '兣', '冭', '冪', '冸', '冹',
    '冺', '冾', '冿', '凨', '凩', '凪', '凫', '凼', '刄', '刈',
    '刉', '刋', '刌', '刏', '刐', '刑', '刓', '刔', '刕', '刜',
    '刞', '刟', '刡', '刢', '刣', '刦', '刧', '刨', '坔', '坕',
    '坙', '坸', '坹', '坺', '坽', '坾', '坿', '垀', '垁', '垇',
    '垈', '垉', '垊', '垍', '垎', '垏', '垐', '垑', '垔', '垕',
    '垖', '垗', '垘', '垙', '垚', '垜', '垝', '垞', '祎', '仡',
    '仝', '仞', '仟', '伋', '仦', '仧', '伛', '伜', '伡', '伨',
    '伩', '伬', '伭', '伮', '伱', '伳', '伵', '伷', '伹', '伻',
    '伾', '伿', '佀', '佁', '佂', '佄', '佅', '佇', '侊', '侌',
    '侎', '侐', '侒', '侓', '侕', '侙', '侚', '侜', '侞', '侟',
    '侠', '価', '侢', '侤', '侭', '侰', '侱', '侲', '昦', '昩',
    '昪', '昫', '昬', '昮', '昰', '昲', '昳', '昴', '昶', '昷',
    '昸', '昹', '昺', '昻', '昽', '昿', '晀', '晁', '時', '晄',
    '晅', '晆', '晇', '晈', '晊', '晍', '晎', '晐', '琟', '琧',
    '琩', '琫', '琭', '琯', '琱', '琲', '琸', '琹', '琻', '琽',
    '琾', '琿', '瑀', '瑂', '瑃', '瑄', '瑅', '瑇', '瑈', '瑉',
    '瑊', '瑌', '瑍', '瑎', '瑏', '瑐', '瑑', '瑒',
];

/// Characters that close a sentence. Includes the comma family, so clauses count as sentences.
pub const TERMINATORS: &[char] = &['。', '！', '？', '；', '：', '，', '.', '!', '?', ';', ':'];

/// Function words excluded from scoring.
///
/// Entries longer than one character never match a character-granularity token.
pub const STOPWORDS: &[&str] = &[
    "的", "了", "是", "在", "有", "和", "就", "都", "而", "及",
    "与", "也", "不", "很", "还", "又", "只", "这", "那", "我",
    "你", "他", "她", "它", "我们", "你们", "他们", "她们", "它们",
];

/// `(word, canonical)` pairs. Later entries overwrite earlier ones with the same key.
pub const SYNONYM_PAIRS: &[(&str, &str)] = &[
    ("周天", "星期天"),
    ("周一", "星期一"),
    ("周二", "星期二"),
    ("周三", "星期三"),
    ("周四", "星期四"),
    ("周五", "星期五"),
    ("周六", "星期六"),
    ("明日", "明天"),
    ("昨日", "昨天"),
    ("今儿", "今天"),
    ("立马", "立刻"),
    ("马上", "立刻"),
    ("即刻", "立刻"),
    ("瞬间", "刹那"),
    ("稍后", "稍后"),
    ("清晨", "早晨"),
    ("傍晚", "黄昏"),
    ("子时", "半夜"),
    ("午时", "中午"),
    ("转瞬", "转眼"),
    ("良久", "很久"),
    ("往昔", "过去"),
    ("未来", "将来"),
    ("稍后", "过会儿"),
    ("凌晨", "拂晓"),
    ("正午", "中午"),
    ("晴朗", "晴"),
    ("下雨", "降雨"),
    ("下雪", "降雪"),
    ("刮风", "吹风"),
    ("多云", "阴天"),
    ("炎热", "酷热"),
    ("寒冷", "严寒"),
    ("暖和", "温暖"),
    ("雷暴", "雷雨"),
    ("冰雹", "雹子"),
    ("雾霭", "雾气"),
    ("霜冻", "冰冻"),
    ("闷热", "湿热"),
    ("凉爽", "凉快"),
    ("狂风", "大风"),
    ("细雨", "小雨"),
    ("观看", "看"),
    ("聆听", "听"),
    ("品尝", "尝"),
    ("行走", "走"),
    ("奔跑", "跑"),
    ("飞翔", "飞"),
    ("攀登", "爬"),
    ("购置", "买"),
    ("售卖", "卖"),
    ("休憩", "休息"),
    ("进食", "吃"),
    ("饮用", "喝"),
    ("抵达", "到达"),
    ("启程", "出发"),
    ("寻觅", "寻找"),
    ("瞧见", "看见"),
    ("知晓", "知道"),
    ("思索", "思考"),
    ("呼喊", "叫"),
    ("赞扬", "表扬"),
    ("责备", "批评"),
    ("培育", "培养"),
    ("研习", "学习"),
    ("投掷", "扔"),
    ("抓取", "抓"),
    ("踩踏", "踩"),
    ("跳跃", "跳"),
    ("躺卧", "躺"),
    ("坐落", "坐"),
    ("关闭", "关"),
    ("开启", "开"),
    ("折断", "折"),
    ("撕裂", "撕"),
    ("涂抹", "涂"),
    ("擦拭", "擦"),
    ("洗涤", "洗"),
    ("晾晒", "晒"),
    ("烹饪", "煮"),
    ("切割", "切"),
    ("咀嚼", "嚼"),
    ("吞咽", "咽"),
    ("呼吸", "喘气"),
    ("睡眠", "睡觉"),
    ("苏醒", "醒来"),
    ("哭泣", "哭"),
    ("欢笑", "笑"),
    ("争吵", "吵架"),
    ("交谈", "说话"),
    ("叮嘱", "嘱咐"),
    ("驳斥", "反驳"),
    ("承认", "认可"),
    ("否认", "不承认"),
    ("允许", "准许"),
    ("禁止", "不许"),
    ("跟随", "跟着"),
    ("引领", "带领"),
    ("等待", "等候"),
    ("催促", "催"),
    ("放弃", "舍弃"),
    ("坚持", "保持"),
    ("获得", "得到"),
    ("失去", "丢失"),
    ("增加", "增多"),
    ("减少", "变少"),
    ("瞅瞅", "看看"),
    ("瞧瞧", "看看"),
    ("瞄瞄", "看看"),
    ("瞥瞥", "看看"),
    ("打量", "观察"),
    ("端详", "细看"),
    ("浏览", "翻看"),
    ("阅览", "阅读"),
    ("诵读", "朗读"),
    ("背诵", "记诵"),
    ("默写", "默记"),
    ("抄写", "誊写"),
    ("誊抄", "抄写"),
    ("绘画", "画画"),
    ("描绘", "描画"),
    ("勾勒", "勾画"),
    ("涂抹", "涂画"),
    ("雕刻", "雕琢"),
    ("塑造", "打造"),
    ("建造", "修建"),
    ("修筑", "修建"),
    ("拆除", "拆掉"),
    ("毁坏", "破坏"),
    ("损坏", "弄坏"),
    ("修复", "修补"),
    ("修补", "缝补"),
    ("缝制", "缝制"),
    ("编织", "编结"),
    ("折叠", "对折"),
    ("展开", "铺开"),
    ("收拾", "整理"),
    ("打扫", "清扫"),
    ("影片", "电影"),
    ("电视机", "电视"),
    ("移动电话", "手机"),
    ("马铃薯", "土豆"),
    ("西红柿", "番茄"),
    ("自行车", "单车"),
    ("计算机", "电脑"),
    ("因特网", "互联网"),
    ("巴士", "公交车"),
    ("的士", "出租车"),
    ("诞辰", "生日"),
    ("居所", "住所"),
    ("钞票", "钱"),
    ("书本", "书"),
    ("电冰箱", "冰箱"),
    ("洗衣机", "洗衣器"),
    ("微波炉", "微波灶"),
    ("吸尘器", "吸尘机"),
    ("吹风机", "电吹风"),
    ("眼镜", "眼镜儿"),
    ("手表", "腕表"),
    ("钢笔", "钢笔"),
    ("橡皮", "橡皮擦"),
    ("书包", "书袋"),
    ("衣服", "衣裳"),
    ("裤子", "裤装"),
    ("鞋子", "鞋"),
    ("帽子", "帽儿"),
    ("袜子", "袜儿"),
    ("米饭", "白饭"),
    ("面条", "面"),
    ("馒头", "馍馍"),
    ("包子", "包儿"),
    ("饺子", "饺儿"),
    ("医院", "病院"),
    ("学校", "学堂"),
    ("商店", "店铺"),
    ("银行", "钱庄"),
    ("邮局", "邮政局"),
    ("车站", "车站"),
    ("机场", "航空港"),
    ("公园", "花园"),
    ("广场", "广场"),
    ("喜悦", "快乐"),
    ("愤怒", "气愤"),
    ("忧虑", "担心"),
    ("恐惧", "害怕"),
    ("惊讶", "吃惊"),
    ("疲惫", "累"),
    ("饥饿", "饿"),
    ("口渴", "渴"),
    ("健康", "安康"),
    ("疾病", "生病"),
    ("强壮", "健壮"),
    ("虚弱", "孱弱"),
    ("聪明", "聪慧"),
    ("愚蠢", "愚笨"),
    ("勇敢", "英勇"),
    ("胆怯", "胆小"),
    ("诚实", "老实"),
    ("虚伪", "虚假"),
    ("善良", "和善"),
    ("凶恶", "凶狠"),
    ("极其", "非常"),
    ("格外", "特别"),
    ("略微", "稍微"),
    ("全部", "全体"),
    ("部分", "局部"),
    ("多数", "大多"),
    ("少数", "少许"),
    ("大量", "许多"),
    ("少量", "少许"),
    ("整个", "全部"),
    ("个别", "单独"),
    ("约莫", "大约"),
    ("几乎", "差不多"),
    ("全部", "所有"),
    ("唯独", "只有"),
    ("倘若", "如果"),
    ("前方", "前面"),
    ("后方", "后面"),
    ("左侧", "左边"),
    ("右侧", "右边"),
    ("内部", "里面"),
    ("外部", "外面"),
    ("上方", "上面"),
    ("下方", "下面"),
    ("附近", "周边"),
    ("远处", "远方"),
    ("中央", "中间"),
    ("角落", "拐角"),
    ("并且", "而且"),
    ("然而", "但是"),
    ("景致", "景色"),
    ("巨大", "庞大"),
    ("渺小", "微小"),
    ("迅速", "快速"),
    ("缓慢", "迟缓"),
    ("美丽", "漂亮"),
    ("丑陋", "难看"),
    ("愉悦", "高兴"),
    ("悲伤", "难过"),
    ("肥胖", "胖"),
    ("瘦削", "瘦"),
    ("宽敞", "宽阔"),
    ("狭窄", "狭小"),
    ("清洁", "洁净"),
    ("肮脏", "污秽"),
    ("整洁", "整齐"),
    ("杂乱", "混乱"),
    ("有序", "整齐"),
    ("无序", "混乱"),
    ("聚集", "集合"),
    ("聚拢", "聚集"),
    ("分散", "散开"),
    ("散开", "分散"),
    ("移动", "挪动"),
    ("挪动", "移动"),
    ("搬运", "运送"),
    ("运送", "运输"),
    ("携带", "带"),
    ("捎带", "顺带"),
    ("丢弃", "扔掉"),
    ("抛弃", "丢弃"),
    ("保存", "保留"),
    ("留存", "保存"),
    ("储存", "存储"),
    ("消耗", "耗费"),
    ("耗费", "消耗"),
    ("节省", "节约"),
    ("节约", "节省"),
    ("浪费", "挥霍"),
    ("挥霍", "浪费"),
    ("获取", "获得"),
    ("获得", "得到"),
    ("给予", "给"),
    ("赠予", "赠送"),
    ("接受", "接收"),
    ("拒绝", "回绝"),
    ("同意", "答应"),
    ("答应", "同意"),
    ("反对", "否决"),
    ("批准", "同意"),
    ("否决", "反对"),
    ("允许", "许可"),
    ("禁止", "不许"),
    ("命令", "指令"),
    ("请求", "恳求"),
    ("恳求", "请求"),
    ("要求", "需求"),
    ("需求", "需要"),
    ("需要", "需求"),
    ("供给", "供应"),
    ("供应", "提供"),
    ("提供", "供应"),
    ("缺乏", "缺少"),
    ("缺少", "缺乏"),
    ("充足", "充裕"),
    ("充裕", "充足"),
    ("丰富", "丰盛"),
    ("丰盛", "丰富"),
    ("稀少", "稀缺"),
    ("稀缺", "稀少"),
    ("困难", "艰难"),
    ("艰难", "困难"),
    ("容易", "简单"),
    ("简单", "容易"),
    ("复杂", "繁杂"),
    ("繁杂", "复杂"),
    ("简单", "简易"),
    ("简易", "简单"),
    ("详细", "细致"),
    ("细致", "详细"),
    ("简略", "简单"),
    ("概括", "归纳"),
    ("归纳", "概括"),
    ("总结", "归纳"),
    ("分析", "剖析"),
    ("剖析", "分析"),
    ("研究", "钻研"),
    ("钻研", "研究"),
    ("学习", "研习"),
    ("研习", "学习"),
    ("教导", "教诲"),
    ("教诲", "教导"),
    ("教育", "培育"),
    ("培育", "培养"),
    ("培养", "培育"),
    ("训练", "锻炼"),
    ("锻炼", "训练"),
    ("练习", "操练"),
    ("操练", "练习"),
    ("掌握", "把握"),
    ("把握", "掌握"),
    ("了解", "知晓"),
    ("知晓", "了解"),
    ("明白", "清楚"),
    ("清楚", "明白"),
    ("糊涂", "迷糊"),
    ("迷糊", "糊涂"),
    ("困惑", "疑惑"),
    ("疑惑", "困惑"),
    ("确定", "肯定"),
    ("肯定", "确定"),
    ("否定", "否认"),
    ("否认", "否定"),
    ("正确", "对"),
    ("错误", "错"),
    ("准确", "精确"),
    ("精确", "准确"),
    ("偏差", "误差"),
    ("误差", "偏差"),
    ("真实", "实在"),
    ("实在", "真实"),
    ("虚假", "虚伪"),
    ("虚伪", "虚假"),
    ("诚实", "老实"),
    ("老实", "诚实"),
    ("狡猾", "狡诈"),
    ("狡诈", "狡猾"),
    ("善良", "和善"),
    ("和善", "善良"),
    ("凶恶", "凶狠"),
    ("凶狠", "凶恶"),
    ("友好", "友善"),
    ("友善", "友好"),
    ("敌对", "对立"),
    ("对立", "敌对"),
    ("团结", "联合"),
    ("联合", "团结"),
    ("分裂", "分开"),
    ("分开", "分裂"),
    ("合作", "协作"),
    ("协作", "合作"),
    ("竞争", "竞赛"),
    ("竞赛", "竞争"),
    ("胜利", "成功"),
    ("成功", "胜利"),
    ("失败", "失利"),
    ("失利", "失败"),
    ("坚持", "保持"),
    ("保持", "坚持"),
    ("放弃", "舍弃"),
    ("舍弃", "放弃"),
    ("努力", "奋力"),
    ("奋力", "努力"),
    ("懈怠", "松懈"),
    ("松懈", "懈怠"),
    ("勤奋", "勤勉"),
    ("勤勉", "勤奋"),
    ("懒惰", "懒散"),
    ("懒散", "懒惰"),
    ("积极", "主动"),
    ("主动", "积极"),
    ("消极", "被动"),
    ("被动", "消极"),
    ("迅速", "快速"),
    ("快速", "迅速"),
    ("缓慢", "迟缓"),
    ("迟缓", "缓慢"),
    ("匆忙", "仓促"),
    ("仓促", "匆忙"),
    ("悠闲", "清闲"),
    ("清闲", "悠闲"),
    ("紧张", "紧迫"),
    ("紧迫", "紧张"),
    ("放松", "松懈"),
    ("松懈", "放松"),
    ("安全", "平安"),
    ("平安", "安全"),
    ("危险", "危急"),
    ("危急", "危险"),
    ("健康", "安康"),
    ("安康", "健康"),
    ("疾病", "病患"),
    ("病患", "疾病"),
    ("治疗", "医治"),
    ("医治", "治疗"),
    ("康复", "痊愈"),
    ("痊愈", "康复"),
    ("死亡", "逝世"),
    ("逝世", "死亡"),
    ("出生", "降生"),
    ("降生", "出生"),
    ("成长", "生长"),
    ("生长", "成长"),
    ("衰老", "苍老"),
    ("苍老", "衰老"),
    ("年轻", "年青"),
    ("年青", "年轻"),
    ("古老", "古旧"),
    ("古旧", "古老"),
    ("崭新", "全新"),
    ("全新", "崭新"),
    ("陈旧", "老旧"),
    ("老旧", "陈旧"),
    ("美丽", "漂亮"),
    ("漂亮", "美丽"),
    ("丑陋", "难看"),
    ("难看", "丑陋"),
    ("英俊", "潇洒"),
    ("潇洒", "英俊"),
    ("丑陋", "丑恶"),
    ("丑恶", "丑陋"),
    ("明亮", "光亮"),
    ("光亮", "明亮"),
    ("黑暗", "昏暗"),
    ("昏暗", "黑暗"),
    ("干净", "洁净"),
    ("洁净", "干净"),
    ("肮脏", "污秽"),
    ("污秽", "肮脏"),
    ("宽敞", "宽阔"),
    ("宽阔", "宽敞"),
    ("狭窄", "狭小"),
    ("狭小", "狭窄"),
    ("高大", "魁梧"),
    ("魁梧", "高大"),
    ("矮小", "瘦小"),
    ("瘦小", "矮小"),
    ("肥胖", "臃肿"),
    ("臃肿", "肥胖"),
    ("瘦削", "瘦弱"),
    ("瘦弱", "瘦削"),
    ("强壮", "强健"),
    ("强健", "强壮"),
    ("虚弱", "衰弱"),
    ("衰弱", "虚弱"),
    ("坚硬", "坚固"),
    ("坚固", "坚硬"),
    ("柔软", "柔嫩"),
    ("柔嫩", "柔软"),
    ("沉重", "繁重"),
    ("繁重", "沉重"),
    ("轻盈", "轻快"),
    ("轻快", "轻盈"),
    ("粗糙", "毛糙"),
    ("毛糙", "粗糙"),
    ("光滑", "平滑"),
    ("平滑", "光滑"),
    ("温暖", "暖和"),
    ("暖和", "温暖"),
    ("寒冷", "严寒"),
    ("严寒", "寒冷"),
    ("炎热", "酷热"),
    ("酷热", "炎热"),
    ("凉爽", "凉快"),
    ("凉快", "凉爽"),
    ("干燥", "干旱"),
    ("干旱", "干燥"),
    ("潮湿", "湿润"),
    ("湿润", "潮湿"),
    ("香甜", "甘甜"),
    ("甘甜", "香甜"),
    ("苦涩", "苦涩"),
    ("辛辣", "麻辣"),
    ("麻辣", "辛辣"),
    ("酸溜溜", "酸"),
    ("咸津津", "咸"),
    ("香喷喷", "香"),
    ("臭烘烘", "臭"),
    ("看电影", "观看影片"),
    ("观看影片", "看电影"),
];

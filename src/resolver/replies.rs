//! Canned reply texts and keyword sets.

pub const EMPTY_REPLY: &str = "我没听清，你可以再说一次吗？";

pub const FAREWELL_REPLY: &str = "再见！(请直接关闭标签页)";

pub const ANOTHER_REPLY: &str =
    "可以问我时间、日期、天气、笑话、心情，或者试试大量预置问答（例如：学习建议1）。";

pub const FAVORITE_REPLY: &str = "我喜欢学习新问题，再告诉你答案。";

pub const IDENTITY_REPLY: &str = "我是一个被移植到 React 的简易聊天机器人。";

pub const WEATHER_REPLIES: [&str; 3] = [
    "我没有实时天气数据，但记得带伞，天气说变就变。",
    "天气未知，不过多喝水总没错！",
    "我不连网，但你可以告诉我现在天气怎样。",
];

pub const JOKES: [&str; 5] = [
    "程序员为什么总是分不清万圣节和圣诞节？因为 OCT 31 == DEC 25。",
    "昨天写了个递归笑话，可惜讲到一半我又开始讲了。",
    "我想讲个缓存的笑话，可是你已经笑过了。",
    "一个 SQL 语句走进一家酒吧，走到两张桌子中间说：'我可以 Join 你们吗？'",
    "0 是 假，1 是 真，其他的都是乱码。",
];

pub const MOOD_REPLIES: [&str; 3] = [
    "和你聊天我就很开心！",
    "心情不错，继续和我聊聊吧。",
    "我没有情绪芯片，但我正专注地听你说。",
];

pub const THANKS_REPLIES: [&str; 3] = ["不客气！", "小事儿，随时找我。", "很高兴能帮到你。"];

pub const GREETINGS: [&str; 3] = ["你好！很高兴见到你。", "嗨，有什么可以帮你？", "Hello!"];

pub const FALLBACKS: [&str; 3] = [
    "这个问题我还不会，但我会继续学习！",
    "有意思的话题，再详细说说？",
    "我现在只懂一些简单的问题，试试切换到 DeepSeek 模式？",
];

pub const EXIT_WORDS: [&str; 4] = ["exit", "quit", "bye", "拜拜"];

pub const TIME_KEYWORDS_RAW: [&str; 1] = ["时间"];
pub const TIME_KEYWORDS: [&str; 1] = ["time"];

pub const DATE_KEYWORDS_RAW: [&str; 1] = ["日期"];
pub const DATE_KEYWORDS: [&str; 1] = ["date"];

pub const WEATHER_KEYWORDS: [&str; 3] = ["天气", "weather", "温度"];

pub const JOKE_KEYWORDS: [&str; 2] = ["笑话", "joke"];

pub const MOOD_KEYWORDS: [&str; 3] = ["你开心吗", "心情", "mood"];

pub const THANKS_KEYWORDS: [&str; 3] = ["谢谢", "thx", "thanks"];

pub const ANOTHER_KEYWORDS: [&str; 3] = ["再来一个", "再说一个", "再讲一个"];

pub const FAVORITE_KEYWORDS_RAW: [&str; 1] = ["你喜欢什么"];
pub const FAVORITE_KEYWORDS: [&str; 1] = ["favorite"];

pub const GREETING_KEYWORDS: [&str; 5] = ["你好", "hi", "hello", "嗨", "hey"];

pub const IDENTITY_KEYWORDS_RAW: [&str; 1] = ["你是谁"];
pub const IDENTITY_KEYWORDS: [&str; 1] = ["who are you"];

pub const HELP_KEYWORDS_RAW: [&str; 1] = ["帮助"];
pub const HELP_KEYWORDS: [&str; 1] = ["help"];

/// Reply for the time rule.
#[must_use]
pub fn time_reply(time: &str, date: &str) -> String {
    format!("现在是 {time} (日期: {date})")
}

/// Reply for the date rule.
#[must_use]
pub fn date_reply(date: &str) -> String {
    format!("今天是 {date}")
}

/// Reply for the help rule.
#[must_use]
pub fn help_reply(entries: usize) -> String {
    format!("试着问我时间、日期、天气、笑话，或输入这些预置关键词如“学习建议1”。我有 {entries} 条预置问答。")
}

//! Fixed word lists and compiled patterns used for text classification.
//!
//! Each pattern sits behind a named predicate so call sites never touch a
//! regex directly.

use regex::Regex;
use std::sync::LazyLock;

// Patterns are string literals; compilation cannot fail at runtime.
static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]+").expect("DIGIT: compile-time constant"));
static EMOTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("震惊|惊喜|必看|揭秘|真相").expect("EMOTION: compile-time constant"));
static EMOTION_EXTENDED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("震惊|惊喜|必看|揭秘|真相|感动").expect("EMOTION_EXTENDED: compile-time constant")
});
static QUESTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("为什么|如何|怎么").expect("QUESTION: compile-time constant"));
static TITLE_QUESTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"为什么|如何|怎么|吗\?").expect("TITLE_QUESTION: compile-time constant")
});
static PAIN_POINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("不懂|不会|迷茫|焦虑|困扰").expect("PAIN_POINT: compile-time constant")
});
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[•·0-9+.\-]").expect("LIST_MARKER: compile-time constant"));
static HEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"【|】|\[|\]|#+").expect("HEADING_MARKER: compile-time constant"));
static STRUCTURE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"【|】|#+|\[[0-9]+\]").expect("STRUCTURE_MARKER: compile-time constant")
});
static VALUE_PROMISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("学会|掌握|搞定|解决|提升").expect("VALUE_PROMISE: compile-time constant")
});
static RESONANCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("感动|震撼|惊讶|认同").expect("RESONANCE: compile-time constant"));
static PRACTICAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("技巧|方法|步骤|攻略|指南").expect("PRACTICAL: compile-time constant")
});
static SCARCITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("独家|首次|揭秘|内部|秘密").expect("SCARCITY: compile-time constant")
});
static CLOSING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("总结|总之|最后|希望|记得").expect("CLOSING: compile-time constant")
});
static CALL_TO_ACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("评论|分享|点赞|关注|你怎么看").expect("CALL_TO_ACTION: compile-time constant")
});
static ENGAGEMENT_PROMPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("评论|分享|你怎么看|记得").expect("ENGAGEMENT_PROMPT: compile-time constant")
});
static EMPHASIS_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[！？?]").expect("EMPHASIS_PUNCTUATION: compile-time constant"));
static EMOTICON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{1F600}-\x{1F64F}]").expect("EMOTICON: compile-time constant")
});
static RANKER_QUESTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("为什么|如何|怎么|吗|？").expect("RANKER_QUESTION: compile-time constant")
});

pub const TITLE_POWER_WORDS: [&str; 10] = [
    "真相", "秘密", "揭秘", "必看", "最全", "干货", "收藏", "指南", "教程", "方法",
];

pub const TITLE_EMOTION_WORDS: [&str; 6] = ["震惊", "感动", "惊喜", "重要", "紧急", "必看"];

/// Lexicon scanned by SEO extraction, grouped by domain. Matched in order.
pub const SEO_KEYWORDS: [(&str, &[&str]); 5] = [
    (
        "经济学",
        &["经济学", "投资", "理财", "金融", "商业", "市场", "消费", "财富", "赚钱", "副业"],
    ),
    (
        "心理学",
        &["心理学", "认知", "情绪", "行为", "习惯", "拖延", "焦虑", "压力", "沟通", "人际关系"],
    ),
    ("科技", &["科技", "AI", "人工智能", "互联网", "数字化", "区块链", "算法", "大数据"]),
    ("商业", &["创业", "商业", "管理", "营销", "品牌", "职场", "领导力", "创新"]),
    ("教育", &["教育", "学习", "考试", "读书", "知识", "技能", "成长", "方法"]),
];

/// Domain name to the keywords that signal it in hot-topic titles.
pub const DOMAIN_KEYWORDS: [(&str, [&str; 10]); 6] = [
    (
        "经济学",
        ["经济", "金融", "投资", "理财", "商业", "市场", "消费", "价格", "货币", "贸易"],
    ),
    (
        "心理学",
        ["心理", "认知", "情绪", "行为", "习惯", "拖延", "焦虑", "压力", "沟通", "人际关系"],
    ),
    (
        "科技",
        ["AI", "人工智能", "科技", "技术", "互联网", "区块链", "数字化", "算法", "大数据", "云计算"],
    ),
    (
        "商业",
        ["创业", "商业", "管理", "营销", "品牌", "战略", "职场", "领导力", "创新", "商业模式"],
    ),
    (
        "历史",
        ["历史", "古代", "朝代", "战争", "文化", "文明", "考古", "人物", "事件", "史书"],
    ),
    (
        "教育",
        ["教育", "学习", "考试", "读书", "知识", "技能", "成长", "方法", "效率", "记忆"],
    ),
];

pub const HOT_TOPIC_TAGS: [&str; 15] = [
    "AI技术", "数字化转型", "个人成长", "副业赚钱", "时间管理",
    "认知升级", "投资理财", "职场技能", "创业经验", "知识付费",
    "心理学", "自我提升", "读书分享", "科技前沿", "商业思维",
];

pub const CONCEPT_WORDS: [&str; 10] = [
    "思维模型", "认知框架", "方法论", "底层逻辑", "核心原理",
    "关键要素", "操作步骤", "实用技巧", "避坑指南", "成功要素",
];

pub const KNOWN_ENTITIES: [&str; 16] = [
    "ChatGPT", "OpenAI", "抖音", "小红书", "B站", "微信",
    "阿里巴巴", "腾讯", "字节跳动", "马斯克", "乔布斯",
    "巴菲特", "比尔盖茨", "马云", "雷军", "张一鸣",
];

/// Keywords for a domain, empty for unknown domains.
pub fn domain_keywords(domain: &str) -> &'static [&'static str] {
    DOMAIN_KEYWORDS
        .iter()
        .find(|(name, _)| *name == domain)
        .map(|(_, words)| words.as_slice())
        .unwrap_or(&[])
}

pub fn has_digit(text: &str) -> bool {
    DIGIT.is_match(text)
}

/// Every run of ASCII digits, parsed. Runs too long for `u64` saturate.
pub fn numbers(text: &str) -> Vec<u64> {
    DIGIT
        .find_iter(text)
        .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .collect()
}

pub fn has_emotion_word(text: &str) -> bool {
    EMOTION.is_match(text)
}

pub fn has_emotion_word_extended(text: &str) -> bool {
    EMOTION_EXTENDED.is_match(text)
}

pub fn has_question_marker(text: &str) -> bool {
    QUESTION.is_match(text)
}

pub fn has_title_question(text: &str) -> bool {
    TITLE_QUESTION.is_match(text)
}

pub fn has_pain_point(text: &str) -> bool {
    PAIN_POINT.is_match(text)
}

pub fn has_list_marker(text: &str) -> bool {
    LIST_MARKER.is_match(text)
}

pub fn has_heading_marker(text: &str) -> bool {
    HEADING_MARKER.is_match(text)
}

pub fn has_structure_marker(text: &str) -> bool {
    STRUCTURE_MARKER.is_match(text)
}

pub fn has_value_promise(text: &str) -> bool {
    VALUE_PROMISE.is_match(text)
}

pub fn has_resonance_word(text: &str) -> bool {
    RESONANCE.is_match(text)
}

pub fn has_practical_word(text: &str) -> bool {
    PRACTICAL.is_match(text)
}

pub fn has_scarcity_word(text: &str) -> bool {
    SCARCITY.is_match(text)
}

pub fn has_closing_word(text: &str) -> bool {
    CLOSING.is_match(text)
}

pub fn has_call_to_action(text: &str) -> bool {
    CALL_TO_ACTION.is_match(text)
}

/// Narrower than [`has_call_to_action`]: likes and follows do not count as
/// inviting a conversation.
pub fn has_engagement_prompt(text: &str) -> bool {
    ENGAGEMENT_PROMPT.is_match(text)
}

pub fn has_emphasis_punctuation(text: &str) -> bool {
    EMPHASIS_PUNCTUATION.is_match(text)
}

pub fn has_emoticon(text: &str) -> bool {
    EMOTICON.is_match(text)
}

pub fn has_ranker_question(text: &str) -> bool {
    RANKER_QUESTION.is_match(text)
}

pub fn count_power_words(text: &str) -> usize {
    TITLE_POWER_WORDS.iter().filter(|word| text.contains(*word)).count()
}

pub fn count_title_emotion_words(text: &str) -> usize {
    TITLE_EMOTION_WORDS.iter().filter(|word| text.contains(*word)).count()
}

/// True when the first character is neither a CJK ideograph nor an ASCII letter.
pub fn starts_with_symbol(text: &str) -> bool {
    match text.chars().next() {
        Some(ch) => !(ch.is_ascii_alphabetic() || ('\u{4e00}'..='\u{9fa5}').contains(&ch)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_marker_matches_digits_and_bullets() {
        assert!(has_list_marker("• 第一点"));
        assert!(has_list_marker("1. 开始"));
        assert!(has_list_marker("a-b"));
        assert!(!has_list_marker("没有任何标记"));
    }

    #[test]
    fn fullwidth_digits_are_not_numbers() {
        assert!(!has_digit("理财心得１２３分享"));
        assert!(numbers("１２３个").is_empty());
        assert!(!has_list_marker("第１２３条"));
        assert!(!has_structure_marker("见［１］"));
    }

    #[test]
    fn numbers_saturate_on_overflow() {
        assert_eq!(numbers("5个和120个"), vec![5, 120]);
        assert_eq!(numbers("99999999999999999999999"), vec![u64::MAX]);
    }

    #[test]
    fn symbol_start_detection() {
        assert!(starts_with_symbol("【收藏】指南"));
        assert!(starts_with_symbol("5个真相"));
        assert!(!starts_with_symbol("关于时间"));
        assert!(!starts_with_symbol("AI时代"));
        assert!(!starts_with_symbol(""));
    }

    #[test]
    fn seo_lexicon_leaves_out_history() {
        let words: Vec<&str> = SEO_KEYWORDS.iter().flat_map(|(_, w)| w.iter().copied()).collect();
        assert!(words.contains(&"副业"));
        assert!(!words.contains(&"古代"));
    }

    #[test]
    fn unknown_domain_has_no_keywords() {
        assert!(domain_keywords("烹饪").is_empty());
        assert_eq!(domain_keywords("科技").len(), 10);
    }
}

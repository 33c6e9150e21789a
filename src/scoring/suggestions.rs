use serde::Serialize;

use crate::lexicon;
use crate::scoring::ScoreBreakdown;
use crate::char_len;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Title,
    Content,
    Timing,
    General,
}

/// Declaration order is sort order: high first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub priority: Priority,
    pub message: String,
    pub action: String,
}

struct RuleContext<'a> {
    scores: &'a ScoreBreakdown,
    title: Option<&'a str>,
    content: Option<&'a str>,
}

struct Rule {
    applies: fn(&RuleContext) -> bool,
    kind: SuggestionKind,
    priority: Priority,
    message: &'static str,
    action: &'static str,
}

const RULES: [Rule; 7] = [
    Rule {
        applies: |ctx| ctx.scores.attractiveness < 60,
        kind: SuggestionKind::Title,
        priority: Priority::High,
        message: "标题吸引力不足",
        action: "建议添加数字、疑问词或情感词，如\"5个技巧\"\"为什么\"\"震惊\"",
    },
    Rule {
        applies: |ctx| ctx.title.map(|t| char_len(t) < 10).unwrap_or(false),
        kind: SuggestionKind::Title,
        priority: Priority::High,
        message: "标题过短",
        action: "建议标题长度15-30字，传递更多信息量",
    },
    Rule {
        applies: |ctx| ctx.scores.readability < 60,
        kind: SuggestionKind::Content,
        priority: Priority::Medium,
        message: "内容可读性有待提升",
        action: "建议使用短段落、分点说明、添加小标题",
    },
    Rule {
        applies: |ctx| ctx.scores.shareability < 60,
        kind: SuggestionKind::Content,
        priority: Priority::Medium,
        message: "内容传播性较弱",
        action: "建议增加实用价值、情感共鸣或稀缺信息",
    },
    Rule {
        applies: |ctx| ctx.content.map(|c| char_len(c) < 200).unwrap_or(true),
        kind: SuggestionKind::Content,
        priority: Priority::High,
        message: "内容篇幅偏短",
        action: "建议扩充到300-2000字，提供更完整的信息",
    },
    Rule {
        applies: |ctx| {
            ctx.content
                .map(|c| !lexicon::has_engagement_prompt(c))
                .unwrap_or(false)
        },
        kind: SuggestionKind::Content,
        priority: Priority::Low,
        message: "缺少互动引导",
        action: "建议在结尾添加互动引导，如\"你怎么看？\"",
    },
    Rule {
        applies: |ctx| ctx.scores.timing < 60,
        kind: SuggestionKind::Timing,
        priority: Priority::Low,
        message: "当前可能不是最佳发布时间",
        action: "建议选择早晚高峰时段（7-9点，18-22点）发布",
    },
];

/// Evaluate every rule and return the triggered suggestions, high priority
/// first. Rules of equal priority keep table order.
pub fn build_suggestions(
    scores: &ScoreBreakdown,
    title: Option<&str>,
    content: Option<&str>,
) -> Vec<Suggestion> {
    let ctx = RuleContext {
        scores,
        title,
        content,
    };

    let mut suggestions: Vec<Suggestion> = RULES
        .iter()
        .filter(|rule| (rule.applies)(&ctx))
        .map(|rule| Suggestion {
            kind: rule.kind,
            priority: rule.priority,
            message: rule.message.to_string(),
            action: rule.action.to_string(),
        })
        .collect();

    suggestions.sort_by_key(|suggestion| suggestion.priority);
    suggestions
}

//! Template-driven title variants and their heuristic ranking.

use serde::Serialize;

use crate::{char_len, clamp_score, lexicon, EngineError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleVariant {
    pub text: String,
    pub style: String,
    pub technique: String,
    pub reason: String,
    pub predicted_score: u8,
}

struct Template {
    pattern: &'static str,
    style: &'static str,
    technique: &'static str,
    reason: &'static str,
}

impl Template {
    fn render(&self, topic: &str) -> TitleVariant {
        TitleVariant {
            text: self.pattern.replace("{topic}", topic),
            style: self.style.to_string(),
            technique: self.technique.to_string(),
            reason: self.reason.to_string(),
            predicted_score: 0,
        }
    }
}

const CATALOG: [Template; 13] = [
    Template {
        pattern: "关于{topic}的5个真相，第3个让90%的人惊讶",
        style: "数字型",
        technique: "具体数字+悬念",
        reason: "数字增加可信度，悬念激发好奇心",
    },
    Template {
        pattern: "{topic}：3分钟搞懂核心要点",
        style: "数字型",
        technique: "时间承诺+价值明确",
        reason: "降低阅读门槛，明确时间成本",
    },
    Template {
        pattern: "为什么{topic}这么重要？看完你就明白了",
        style: "疑问型",
        technique: "反问+结果承诺",
        reason: "引发思考，承诺价值",
    },
    Template {
        pattern: "{topic}真的有用吗？实测结果出乎意料",
        style: "疑问型",
        technique: "质疑+反转",
        reason: "打破认知，制造冲突",
    },
    Template {
        pattern: "还在为{topic}烦恼？这个方法帮你解决",
        style: "痛点型",
        technique: "痛点共鸣+解决方案",
        reason: "直击痛点，提供希望",
    },
    Template {
        pattern: "不懂{topic}的人，正在错失这些机会",
        style: "痛点型",
        technique: "损失厌恶",
        reason: "制造紧迫感，触发损失厌恶",
    },
    Template {
        pattern: "深度解析：{topic}的本质与未来趋势",
        style: "权威型",
        technique: "专业术语+深度",
        reason: "建立权威感，吸引专业读者",
    },
    Template {
        pattern: "{topic}：新手vs高手的思维方式差异",
        style: "对比型",
        technique: "对比冲突",
        reason: "对比产生张力，激发学习兴趣",
    },
    Template {
        pattern: "揭秘：{topic}背后不为人知的秘密",
        style: "揭秘型",
        technique: "神秘感+稀缺性",
        reason: "制造独家感，满足窥探欲",
    },
    Template {
        pattern: "【收藏】{topic}最全指南，一篇文章搞定",
        style: "实用型",
        technique: "收藏价值+全面性",
        reason: "实用价值高，促进收藏转发",
    },
    Template {
        pattern: "看完这篇关于{topic}的文章，我彻底改变了想法",
        style: "情感型",
        technique: "情感共鸣+转变",
        reason: "情感驱动，制造代入感",
    },
    Template {
        pattern: "{topic}的真相可能和你想的不一样",
        style: "反常识型",
        technique: "认知冲突",
        reason: "打破预期，激发好奇心",
    },
    Template {
        pattern: "从{topic}小白到专家，我的成长之路",
        style: "故事型",
        technique: "成长叙事",
        reason: "故事性强，易于产生共鸣",
    },
];

const PLATFORM_EXTRAS: [(&str, Template); 2] = [
    (
        "douyin",
        Template {
            pattern: "{topic}太重要了！30秒讲清楚",
            style: "抖音型",
            technique: "短视频钩子+时间承诺",
            reason: "符合抖音快节奏特点",
        },
    ),
    (
        "xiaohongshu",
        Template {
            pattern: "姐妹们！{topic}的保姆级教程来了✨",
            style: "小红书型",
            technique: "亲切称呼+emoji+实用承诺",
            reason: "符合小红书种草风格",
        },
    ),
];

/// Render the fixed catalog for `topic` plus any platform-specific extras,
/// in catalog order and unscored.
pub fn generate_titles(
    topic: &str,
    _content: Option<&str>,
    target_platforms: &[String],
) -> Result<Vec<TitleVariant>, EngineError> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(EngineError::invalid("topic is required"));
    }

    let mut variants: Vec<TitleVariant> = CATALOG.iter().map(|t| t.render(topic)).collect();
    for (platform, template) in PLATFORM_EXTRAS.iter() {
        if target_platforms.iter().any(|p| p.as_str() == *platform) {
            variants.push(template.render(topic));
        }
    }
    Ok(variants)
}

/// Score every variant and sort best first. Equal scores keep generation order.
pub fn rank_titles(mut variants: Vec<TitleVariant>) -> Vec<TitleVariant> {
    for variant in variants.iter_mut() {
        variant.predicted_score = score_title(&variant.text);
    }
    variants.sort_by(|a, b| b.predicted_score.cmp(&a.predicted_score));
    variants
}

pub fn score_title(title: &str) -> u8 {
    let mut score: i32 = 50;
    let len = char_len(title);

    if (15..=30).contains(&len) {
        score += 15;
    } else if (10..=40).contains(&len) {
        score += 10;
    }

    if lexicon::has_digit(title) {
        score += 10;
    }
    if lexicon::has_emphasis_punctuation(title) {
        score += 5;
    }
    if lexicon::has_emoticon(title) {
        score += 5;
    }

    score += lexicon::count_power_words(title) as i32 * 3;
    score += lexicon::count_title_emotion_words(title) as i32 * 2;

    if lexicon::has_ranker_question(title) {
        score += 5;
    }

    if let Some(max) = lexicon::numbers(title).into_iter().max() {
        if max >= 10 {
            score += 3;
        }
        if max >= 50 {
            score += 5;
        }
        if max >= 100 {
            score += 8;
        }
    }

    if len < 8 {
        score -= 10;
    }
    if len > 50 {
        score -= 10;
    }
    if lexicon::starts_with_symbol(title) {
        score -= 5;
    }

    clamp_score(score)
}

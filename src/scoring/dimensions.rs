use crate::config::ScoreWeights;
use crate::lexicon;
use crate::scoring::timing::{timing_score, PostingTime};
use crate::scoring::{ContentInput, ScoreBreakdown};
use crate::{char_len, clamp_score, round_half_up};

const BASE: i32 = 50;

pub fn score_content(input: &ContentInput, at: &PostingTime, weights: &ScoreWeights) -> ScoreBreakdown {
    let title = input.title();
    let content = input.content();
    let text = format!("{} {}", title.unwrap_or(""), content.unwrap_or(""));

    let attractiveness = attractiveness(title);
    let readability = readability(content);
    let shareability = shareability(&text);
    let completeness = completeness(content);
    let timing = timing_score(input.platform, at);

    let weighted = attractiveness as f64 * weights.attractiveness
        + readability as f64 * weights.readability
        + shareability as f64 * weights.shareability
        + completeness as f64 * weights.completeness
        + timing as f64 * weights.timing;
    let overall = round_half_up(weighted).clamp(0, 100) as u8;

    ScoreBreakdown {
        overall,
        attractiveness,
        readability,
        shareability,
        completeness,
        timing,
    }
}

pub fn attractiveness(title: Option<&str>) -> u8 {
    let mut score = BASE;
    if let Some(title) = title {
        let len = char_len(title);
        if (15..=30).contains(&len) {
            score += 10;
        }
        if lexicon::has_digit(title) {
            score += 10;
        }
        if lexicon::has_emotion_word(title) {
            score += 15;
        }
        if lexicon::has_question_marker(title) {
            score += 10;
        }
        if lexicon::has_pain_point(title) {
            score += 10;
        }
    }
    clamp_score(score)
}

pub fn readability(content: Option<&str>) -> u8 {
    let mut score = BASE;
    if let Some(content) = content {
        let len = char_len(content);
        let paragraphs = content.split('\n').count().max(1);
        let avg_paragraph = len as f64 / paragraphs as f64;
        if avg_paragraph < 100.0 {
            score += 15;
        }
        if lexicon::has_list_marker(content) {
            score += 15;
        }
        if lexicon::has_heading_marker(content) {
            score += 10;
        }
        if (300..=2000).contains(&len) {
            score += 10;
        }
    }
    clamp_score(score)
}

pub fn shareability(text: &str) -> u8 {
    let mut score = BASE;
    if lexicon::has_value_promise(text) {
        score += 15;
    }
    if lexicon::has_resonance_word(text) {
        score += 10;
    }
    if lexicon::has_practical_word(text) {
        score += 15;
    }
    if lexicon::has_scarcity_word(text) {
        score += 10;
    }
    clamp_score(score)
}

pub fn completeness(content: Option<&str>) -> u8 {
    let mut score = BASE;
    if let Some(content) = content {
        let len = char_len(content);
        if len > 50 {
            score += 10;
        }
        if len > 300 {
            score += 15;
        }
        if lexicon::has_closing_word(content) {
            score += 15;
        }
        if lexicon::has_call_to_action(content) {
            score += 10;
        }
    }
    clamp_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fullwidth_digits_do_not_raise_attractiveness() {
        assert_eq!(attractiveness(Some("理财心得１２３分享")), 50);
        assert_eq!(attractiveness(Some("理财心得123分享")), 60);
    }

    #[test]
    fn absent_title_keeps_base() {
        assert_eq!(attractiveness(None), 50);
    }

    #[test]
    fn title_bonuses_accumulate() {
        // 16 chars, digit, emotion word, question marker, pain point.
        let title = "为什么你总是焦虑？揭秘3个真相啊啊";
        assert_eq!(attractiveness(Some(title)), 100);
    }

    #[test]
    fn single_line_long_content_misses_paragraph_bonus() {
        let content = "字".repeat(250);
        assert_eq!(readability(Some(&content)), 50);
    }

    #[test]
    fn punctuation_only_content_degrades_gracefully() {
        assert_eq!(completeness(Some("！！！")), 50);
        assert_eq!(shareability("？？"), 50);
    }
}

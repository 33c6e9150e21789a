use chrono::{Duration, Utc, Weekday};
use creator_engine::config::EngineConfig;
use creator_engine::{
    lookup_history, predict_performance, score_content, CompletedTask, ContentInput, CreatorRecord,
    EngineError, HistoryStore, Platform, PostingTime, Potential, ScoreBreakdown, UserHistory,
};

fn weekday_noon() -> PostingTime {
    PostingTime::new(12, Weekday::Wed)
}

fn structured_content() -> String {
    let mut content = String::from("最近很多人问奶茶为什么越来越贵，我整理了几个原因。\n");
    for _ in 0..14 {
        content.push_str("• 原材料成本上涨，门店租金和人工也在增加。\n");
    }
    content.push_str("你怎么看？欢迎在评论区分享。");
    content
}

fn assert_overall_matches_weights(scores: &ScoreBreakdown, config: &EngineConfig) {
    let w = &config.weights;
    let expected = scores.attractiveness as f64 * w.attractiveness
        + scores.readability as f64 * w.readability
        + scores.shareability as f64 * w.shareability
        + scores.completeness as f64 * w.completeness
        + scores.timing as f64 * w.timing;
    assert!((scores.overall as f64 - expected).abs() <= 1.0);
}

#[test]
fn milk_tea_draft_scores_well() {
    let content = structured_content();
    assert!(content.chars().count() >= 300);

    let input = ContentInput {
        title: Some("为什么奶茶越来越贵？5个真相".to_string()),
        content: Some(content),
        platform: Some(Platform::Douyin),
    };
    let config = EngineConfig::default();
    let scores = score_content(&input, &weekday_noon(), &config.weights);

    assert!(scores.attractiveness >= 75);
    assert!(scores.readability >= 70);
    // Noon is a douyin best hour.
    assert_eq!(scores.timing, 80);
    assert_overall_matches_weights(&scores, &config);
}

#[test]
fn every_score_stays_in_range() {
    let config = EngineConfig::default();
    let drafts = [
        ("震惊！为什么你总是焦虑？揭秘3个真相", "学会这些技巧和方法，独家揭秘。总结一下，记得点赞关注评论分享。"),
        ("a", "。"),
        ("？？？", ""),
        ("", "【一】## 标题\n- 1\n- 2"),
    ];

    for (title, content) in drafts {
        for hour in [0, 7, 12, 23] {
            for weekday in [Weekday::Mon, Weekday::Sun] {
                let input = ContentInput {
                    title: Some(title.to_string()),
                    content: Some(content.to_string()),
                    platform: Some(Platform::Xiaohongshu),
                };
                let scores = score_content(&input, &PostingTime::new(hour, weekday), &config.weights);
                for value in [
                    scores.overall,
                    scores.attractiveness,
                    scores.readability,
                    scores.shareability,
                    scores.completeness,
                    scores.timing,
                ] {
                    assert!(value <= 100);
                }
                assert_overall_matches_weights(&scores, &config);
            }
        }
    }
}

#[test]
fn missing_title_and_content_is_invalid() {
    let input = ContentInput {
        title: Some("   ".to_string()),
        content: None,
        platform: None,
    };
    let err = predict_performance(&input, None, &weekday_noon(), &EngineConfig::default())
        .expect_err("blank draft");
    assert!(matches!(err, EngineError::InvalidInput(_)));
}

#[test]
fn prediction_is_repeatable() {
    let input = ContentInput {
        title: Some("如何在30天内掌握时间管理".to_string()),
        content: Some(structured_content()),
        platform: Some(Platform::Zhihu),
    };
    let config = EngineConfig::default();
    let first = predict_performance(&input, None, &weekday_noon(), &config).expect("valid draft");
    let second = predict_performance(&input, None, &weekday_noon(), &config).expect("valid draft");

    assert_eq!(first.scores, second.scores);
    assert_eq!(first.suggestions, second.suggestions);
    assert_eq!(first.prediction.estimated_views, second.prediction.estimated_views);
    assert_eq!(first.prediction.potential, Potential::from_overall(first.scores.overall));
}

#[test]
fn suggestions_are_ordered_by_priority() {
    let input = ContentInput {
        title: Some("短".to_string()),
        content: Some("内容".to_string()),
        platform: None,
    };
    let report = predict_performance(&input, None, &PostingTime::new(3, Weekday::Tue), &EngineConfig::default())
        .expect("valid draft");
    assert!(!report.suggestions.is_empty());
    assert!(report
        .suggestions
        .windows(2)
        .all(|pair| pair[0].priority <= pair[1].priority));
}

#[test]
fn strong_history_raises_estimates() {
    let now = Utc::now();
    let store = HistoryStore::from_records(vec![CreatorRecord {
        user_id: "veteran".to_string(),
        completed_tasks: (0..5)
            .map(|day| CompletedTask {
                domain: "经济学".to_string(),
                completed_at: now - Duration::days(day),
            })
            .collect(),
        ratings: vec![5, 5, 5],
    }]);
    let history = store.history("veteran", now);

    // A modest draft keeps both estimates below the thousands cutoff.
    let input = ContentInput {
        title: Some("短标题".to_string()),
        content: Some("内容".to_string()),
        platform: Some(Platform::Wechat),
    };
    let config = EngineConfig::default();
    let baseline = predict_performance(&input, None, &weekday_noon(), &config).expect("valid draft");
    let boosted =
        predict_performance(&input, Some(&history), &weekday_noon(), &config).expect("valid draft");

    assert_eq!(baseline.scores, boosted.scores);
    assert_eq!(boosted.prediction.estimated_views.unit, "");
    assert!(boosted.prediction.estimated_views.max > baseline.prediction.estimated_views.max);
    assert_eq!(boosted.prediction.confidence, baseline.prediction.confidence + 20);
}

#[test]
fn unknown_creator_still_earns_history_confidence() {
    let store = HistoryStore::from_records(Vec::new());
    let history = lookup_history(Some(&store), Some("new-user"), Utc::now()).expect("named user");
    assert_eq!(history, UserHistory::default());

    let input = ContentInput {
        title: Some("短标题".to_string()),
        content: Some("内容".to_string()),
        platform: Some(Platform::Wechat),
    };
    let config = EngineConfig::default();
    let anonymous = predict_performance(&input, None, &weekday_noon(), &config).expect("valid draft");
    let newcomer =
        predict_performance(&input, Some(&history), &weekday_noon(), &config).expect("valid draft");

    // Rating 3.5 leaves reach unchanged; only confidence moves.
    assert_eq!(newcomer.prediction.estimated_views, anonymous.prediction.estimated_views);
    assert_eq!(newcomer.prediction.confidence, 80);
    assert_eq!(anonymous.prediction.confidence, 60);
}

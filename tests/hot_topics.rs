use rand::{rngs::StdRng, SeedableRng};

use creator_engine::{
    builtin_catalog, filter_by_domains, generate_topic_from_hot, rank_topics, relevance_score,
    HotTopic, Trend,
};

fn topic(id: &str, title: &str, heat: u8, trend: Trend, category: Option<&str>) -> HotTopic {
    HotTopic {
        id: id.to_string(),
        title: title.to_string(),
        platform: "zhihu".to_string(),
        heat,
        trend,
        category: category.map(str::to_string),
        url: None,
    }
}

fn domains(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn exact_category_match_scores_ninety_five() {
    let hot = topic("t1", "新品发布会", 90, Trend::Up, Some("科技"));
    assert_eq!(relevance_score(&hot, &domains(&["科技"])), 95);
}

#[test]
fn category_match_beats_no_match_at_equal_heat() {
    let matched = topic("a", "一个标题", 60, Trend::Stable, Some("商业"));
    let unmatched = topic("b", "另一个标题", 60, Trend::Stable, Some("娱乐"));
    let uncategorised = topic("c", "第三个标题", 60, Trend::Stable, None);
    let wanted = domains(&["商业"]);

    let best = relevance_score(&matched, &wanted);
    assert!(best >= relevance_score(&unmatched, &wanted));
    assert!(best >= relevance_score(&uncategorised, &wanted));
}

#[test]
fn ranking_is_sorted_and_stable() {
    let topics = vec![
        topic("first", "甲", 50, Trend::Down, None),
        topic("hot", "乙", 99, Trend::Up, None),
        topic("second", "丙", 50, Trend::Down, None),
    ];
    let ranked = rank_topics(topics, &[]);

    assert_eq!(ranked[0].topic.id, "hot");
    assert_eq!(ranked[1].topic.id, "first");
    assert_eq!(ranked[2].topic.id, "second");
    assert!(ranked
        .windows(2)
        .all(|pair| pair[0].relevance_score >= pair[1].relevance_score));
}

#[test]
fn filtering_keeps_category_and_keyword_matches() {
    let catalog = builtin_catalog();
    let filtered = filter_by_domains(&catalog, &domains(&["科技"]));

    assert!(!filtered.is_empty());
    assert!(filtered.iter().all(|t| t.category.as_deref() == Some("科技")
        || t.title.contains("AI")
        || t.title.contains("人工智能")
        || t.title.contains("区块链")));
    assert_eq!(filter_by_domains(&catalog, &[]).len(), catalog.len());
}

#[test]
fn seeded_idea_generation_is_reproducible() {
    let hot = topic("z", "通胀为什么持续走高", 80, Trend::Up, Some("经济学"));

    let first = generate_topic_from_hot(&hot, "经济学", &mut StdRng::seed_from_u64(42));
    let second = generate_topic_from_hot(&hot, "经济学", &mut StdRng::seed_from_u64(42));

    assert_eq!(first, second);
    assert!(first.title.contains("通胀为什么持续走高"));
    assert_eq!(first.outline.len(), 4);
}

#[test]
fn unknown_domain_uses_default_ideas() {
    let hot = topic("z", "春节档电影", 70, Trend::Stable, None);
    let mut rng = StdRng::seed_from_u64(1);
    let idea = generate_topic_from_hot(&hot, "烹饪", &mut rng);
    assert!(idea.title == "春节档电影的深层解读" || idea.title == "春节档电影，你需要知道的3件事");
}

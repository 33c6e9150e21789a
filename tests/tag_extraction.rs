use std::collections::HashSet;

use creator_engine::{extract_tags, EngineError, ExtractionFlags};

fn assert_unique(items: &[String]) {
    let unique: HashSet<&String> = items.iter().collect();
    assert_eq!(unique.len(), items.len(), "duplicates in {:?}", items);
}

#[test]
fn empty_content_and_topic_is_invalid() {
    let err = extract_tags(Some(""), Some(""), None, ExtractionFlags::default())
        .expect_err("nothing to extract from");
    assert!(matches!(err, EngineError::InvalidInput(_)));
}

#[test]
fn lists_are_capped_and_unique() {
    let content = "人工智能 AI 大数据 区块链 云计算 物联网 5G 元宇宙 芯片 算法，\
        创业 投资 营销 管理 品牌 电商 融资 商业模式 增长 运营。\
        读了《思考，快与慢》和“原子习惯”，马斯克和乔布斯都谈过 \"第一性原理\"。\
        AI 热点 干货 教程 攻略 必看 收藏 认知 思维 底层逻辑";
    let result = extract_tags(Some(content), Some("科技创业"), None, ExtractionFlags::default())
        .expect("valid text");

    assert!(result.seo.len() <= 15);
    assert!(result.topics.len() <= 10);
    assert!(result.entities.len() <= 10);
    assert_unique(&result.seo);
    assert_unique(&result.topics);
    assert_unique(&result.entities);

    assert!(result.seo.iter().any(|k| k == "AI"));
    assert!(result.entities.iter().any(|e| e == "思考，快与慢"));
    assert!(result.entities.iter().any(|e| e == "原子习惯"));
    assert!(result.entities.iter().any(|e| e == "第一性原理"));
}

#[test]
fn disabled_flags_leave_lists_empty() {
    let flags = ExtractionFlags {
        seo: false,
        topics: false,
        entities: true,
    };
    let result = extract_tags(Some("推荐《穷查理宝典》"), None, Some("douyin"), flags)
        .expect("valid text");

    assert!(result.seo.is_empty());
    assert!(result.topics.is_empty());
    assert_eq!(result.entities, vec!["穷查理宝典".to_string()]);
    assert_eq!(result.hashtags.len(), 1);
    assert_eq!(result.hashtags["douyin"], vec!["#穷查理宝典".to_string()]);
}

#[test]
fn unknown_platform_produces_every_hashtag_set() {
    let result = extract_tags(None, Some("理财投资"), Some("weibo"), ExtractionFlags::default())
        .expect("valid topic");
    assert_eq!(result.hashtags.len(), 5);
    for tags in result.hashtags.values() {
        assert!(tags.len() <= 8);
    }
}

#[test]
fn recommendations_use_topic_and_keywords() {
    let result = extract_tags(Some("投资需要长期主义"), Some("理财"), None, ExtractionFlags::default())
        .expect("valid text");
    assert!(result.recommendations.title.starts_with("理财："));
    assert!(result.recommendations.title.ends_with("完整指南"));
    assert!(result.recommendations.description.ends_with("..."));
}

#[test]
fn seo_keywords_cover_side_income_and_skip_history_words() {
    let result = extract_tags(None, Some("副业赚钱与财富"), None, ExtractionFlags::default())
        .expect("valid topic");
    assert_eq!(result.seo, vec!["财富".to_string(), "赚钱".to_string(), "副业".to_string()]);

    let result = extract_tags(None, Some("古代文化人物"), None, ExtractionFlags::default())
        .expect("valid topic");
    assert!(result.seo.is_empty());
}

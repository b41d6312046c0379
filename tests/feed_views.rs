//! Integration tests for the feed views: snapshot decoding, the flattened
//! all-posts ordering, single-category lookup, and card materialization.
//!
//! The two-category payload used throughout matches the shape the forum
//! service emits from its guest endpoint.

use forum_tui::feed::{tally, FeedModel, FeedSnapshot, ModelError, ReactionTally};
use forum_tui::ui::binder::{BinderRegistry, BindingKey};
use forum_tui::ui::cards::{build_all_posts, build_category};
use forum_tui::ui::tabs::{Tab, TabController};
use pretty_assertions::assert_eq;

fn snapshot() -> FeedSnapshot {
    serde_json::from_str(
        r#"{"categories":[
            {"id":1,"name":"General","posts":[
                {"id":10,"username":"ada","content":"older post",
                 "created_at":"2024-01-01T00:00:00Z","reactions":[],"comments":[]}
            ]},
            {"id":2,"name":"Help","posts":[
                {"id":11,"username":"eve","content":"newer post",
                 "created_at":"2024-02-01T00:00:00Z",
                 "reactions":[{"target_id":11,"target_type":"post","reaction_type":1}],
                 "comments":[]}
            ]}
        ]}"#,
    )
    .unwrap()
}

// ============================================================================
// View Ordering
// ============================================================================

#[test]
fn all_posts_view_orders_newest_first() {
    let model = FeedModel::new(snapshot());
    let view = model.all_posts();

    let ids: Vec<i64> = view.iter().map(|p| p.post.id).collect();
    assert_eq!(ids, vec![11, 10]);
    assert_eq!(view[0].category_name, "Help");
}

#[test]
fn all_posts_view_is_stable_for_equal_timestamps() {
    let model = FeedModel::new(
        serde_json::from_str(
            r#"{"categories":[
                {"id":1,"name":"A","posts":[
                    {"id":1,"username":"u","content":"x","created_at":"2024-01-01T00:00:00Z"},
                    {"id":2,"username":"u","content":"x","created_at":"2024-01-01T00:00:00Z"}
                ]},
                {"id":2,"name":"B","posts":[
                    {"id":3,"username":"u","content":"x","created_at":"2024-01-01T00:00:00Z"}
                ]}
            ]}"#,
        )
        .unwrap(),
    );

    let ids: Vec<i64> = model.all_posts().iter().map(|p| p.post.id).collect();
    assert_eq!(ids, vec![1, 2, 3]); // snapshot encounter order preserved
}

#[test]
fn liked_post_tallies_from_its_reaction_set() {
    let model = FeedModel::new(snapshot());
    let view = model.all_posts();
    assert_eq!(
        tally(&view[0].post.reactions),
        ReactionTally { likes: 1, dislikes: 0 }
    );
    assert_eq!(tally(&view[1].post.reactions), ReactionTally::default());
}

// ============================================================================
// Category Lookup
// ============================================================================

#[test]
fn category_view_finds_present_ids() {
    let model = FeedModel::new(snapshot());
    let category = model.category(2).unwrap();
    assert_eq!(category.name, "Help");
    assert_eq!(category.posts.len(), 1);
}

#[test]
fn category_view_reports_absent_ids() {
    let model = FeedModel::new(snapshot());
    assert_eq!(model.category(42), Err(ModelError::NotFound(42)));
}

// ============================================================================
// Card Materialization
// ============================================================================

#[test]
fn all_posts_cards_carry_headers_and_initial_tallies() {
    let model = FeedModel::new(snapshot());
    let mut binders = BinderRegistry::new();
    let cards = build_all_posts(&model, &mut binders);

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].header, "eve posted in Help");
    assert_eq!(cards[1].header, "ada posted in General");
    assert_eq!(
        binders.tally(BindingKey::post(11)),
        Some(ReactionTally { likes: 1, dislikes: 0 })
    );
    assert_eq!(
        binders.tally(BindingKey::post(10)),
        Some(ReactionTally { likes: 0, dislikes: 0 })
    );
}

#[test]
fn category_cards_are_a_full_replace_of_the_previous_view() {
    let model = FeedModel::new(snapshot());
    let mut binders = BinderRegistry::new();

    build_all_posts(&model, &mut binders);
    assert_eq!(binders.len(), 2);

    let cards = build_category(model.category(1).unwrap(), &mut binders);
    assert_eq!(cards.len(), 1);
    assert_eq!(binders.len(), 1);
    assert!(!binders.is_bound(BindingKey::post(11)));
}

// ============================================================================
// Tab Selection
// ============================================================================

#[test]
fn selecting_an_absent_category_renders_nothing() {
    let model = FeedModel::new(snapshot());
    let mut binders = BinderRegistry::new();
    let mut tabs = TabController::new();

    tabs.select_all_posts(&model, &mut binders);
    let cards = tabs.select_category(42, &model, &mut binders);

    assert!(cards.is_empty());
    assert!(binders.is_empty());
    assert_eq!(tabs.active(), Tab::Category(42));
}

#[test]
fn tab_switches_rebuild_without_refetching() {
    // The model is the only data source; switching views back and forth
    // must reproduce the same cards from the held snapshot.
    let model = FeedModel::new(snapshot());
    let mut binders = BinderRegistry::new();
    let mut tabs = TabController::new();

    let first = tabs.select_all_posts(&model, &mut binders);
    tabs.select_category(1, &model, &mut binders);
    let second = tabs.select_all_posts(&model, &mut binders);

    let first_keys: Vec<_> = first.iter().map(|c| c.key).collect();
    let second_keys: Vec<_> = second.iter().map(|c| c.key).collect();
    assert_eq!(first_keys, second_keys);
}

//! Feed card materialization.
//!
//! Turns a feed view into the flat card list the terminal renders from.
//! Both builders are full-replace: the previous card list and every previous
//! reaction binding are discarded before the new view is materialized, never
//! diffed or patched. Each post and each comment registers its reaction
//! controls with the [`BinderRegistry`](super::binder::BinderRegistry) as it
//! is built, with initial counts taken from its reaction set.

use super::binder::{BinderRegistry, BindingKey};
use crate::feed::{Category, FeedModel, Post};
use chrono::{DateTime, Local, Utc};

/// A rendered comment, nested under its post's card.
#[derive(Debug, Clone)]
pub struct CommentCard {
    pub key: BindingKey,
    pub username: String,
    pub content: String,
    pub timestamp: String,
}

/// A rendered post: header line, optional title, body, local timestamp, and
/// the nested comment cards. Reaction counts live in the binder registry,
/// not here, so a confirmed reaction updates the display without rebuilding
/// the card.
#[derive(Debug, Clone)]
pub struct PostCard {
    pub key: BindingKey,
    pub header: String,
    pub title: String,
    pub content: String,
    pub timestamp: String,
    pub comments: Vec<CommentCard>,
}

/// Format a timestamp for display in the viewer's local time zone.
fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

fn build_post_card(post: &Post, category_name: &str, binders: &mut BinderRegistry) -> PostCard {
    let key = BindingKey::post(post.id);
    binders.bind(key, &post.reactions);

    let comments = post
        .comments
        .iter()
        .map(|comment| {
            let key = BindingKey::comment(comment.id);
            binders.bind(key, &comment.reactions);
            CommentCard {
                key,
                username: comment.username.clone(),
                content: comment.content.clone(),
                timestamp: format_timestamp(comment.created_at),
            }
        })
        .collect();

    PostCard {
        key,
        header: format!("{} posted in {}", post.username, category_name),
        title: post.title.clone(),
        content: post.content.clone(),
        timestamp: format_timestamp(post.created_at),
        comments,
    }
}

/// Materialize the all-posts view: every post across every category, newest
/// first, each header carrying the owning category's name.
pub fn build_all_posts(model: &FeedModel, binders: &mut BinderRegistry) -> Vec<PostCard> {
    binders.clear();
    model
        .all_posts()
        .into_iter()
        .map(|entry| build_post_card(entry.post, entry.category_name, binders))
        .collect()
}

/// Materialize the single-category view in the category's own post order.
pub fn build_category(category: &Category, binders: &mut BinderRegistry) -> Vec<PostCard> {
    binders.clear();
    category
        .posts
        .iter()
        .map(|post| build_post_card(post, &category.name, binders))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{FeedSnapshot, Reaction, ReactionKind, ReactionTally};

    fn snapshot() -> FeedSnapshot {
        serde_json::from_str(
            r#"{"categories":[
                {"id":1,"name":"General","posts":[
                    {"id":10,"username":"ada","content":"hello","created_at":"2024-01-01T00:00:00Z",
                     "comments":[{"id":100,"username":"bob","content":"hi back",
                                  "created_at":"2024-01-01T01:00:00Z",
                                  "reactions":[{"reaction_type":2}]}]}
                ]},
                {"id":2,"name":"Help","posts":[
                    {"id":11,"username":"eve","content":"newer","created_at":"2024-02-01T00:00:00Z",
                     "reactions":[{"target_id":11,"target_type":"post","reaction_type":1}]}
                ]}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn all_posts_cards_follow_view_order_and_bind_everything() {
        let model = FeedModel::new(snapshot());
        let mut binders = BinderRegistry::new();
        let cards = build_all_posts(&model, &mut binders);

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].key, BindingKey::post(11));
        assert_eq!(cards[0].header, "eve posted in Help");
        assert_eq!(cards[1].header, "ada posted in General");
        assert_eq!(cards[1].comments.len(), 1);
        assert_eq!(cards[1].comments[0].username, "bob");

        // Two posts and one comment, each bound exactly once
        assert_eq!(binders.len(), 3);
        assert_eq!(
            binders.tally(BindingKey::post(11)),
            Some(ReactionTally { likes: 1, dislikes: 0 })
        );
        assert_eq!(
            binders.tally(BindingKey::comment(100)),
            Some(ReactionTally { likes: 0, dislikes: 1 })
        );
    }

    #[test]
    fn rebuilding_is_a_full_replace() {
        let model = FeedModel::new(snapshot());
        let mut binders = BinderRegistry::new();
        binders.bind(BindingKey::post(999), &[Reaction::of_kind(ReactionKind::Like)]);

        let cards = build_all_posts(&model, &mut binders);
        assert_eq!(cards.len(), 2);
        // The stray binding from the discarded render is gone.
        assert!(!binders.is_bound(BindingKey::post(999)));
        assert_eq!(binders.len(), 3);
    }

    #[test]
    fn category_cards_keep_snapshot_post_order() {
        let model = FeedModel::new(snapshot());
        let mut binders = BinderRegistry::new();
        let cards = build_category(model.category(1).unwrap(), &mut binders);

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].key, BindingKey::post(10));
        assert_eq!(cards[0].content, "hello");
        assert_eq!(binders.len(), 2); // post 10 + comment 100
    }
}

//! Category tab selection.
//!
//! A small state machine over `{AllPosts, Category(id)}` that drives which
//! view the card builder materializes. The controller lives for the process
//! lifetime; there is no terminal state.

use super::binder::BinderRegistry;
use super::cards::{build_all_posts, build_category, PostCard};
use crate::feed::FeedModel;

/// Which tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// "My Feed": all posts across categories, newest first.
    AllPosts,
    /// Posts of one category, in snapshot order.
    Category(i64),
}

#[derive(Debug)]
pub struct TabController {
    active: Tab,
}

impl Default for TabController {
    fn default() -> Self {
        Self::new()
    }
}

impl TabController {
    pub fn new() -> Self {
        Self {
            active: Tab::AllPosts,
        }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Switch to the all-posts view and rebuild its cards.
    pub fn select_all_posts(
        &mut self,
        model: &FeedModel,
        binders: &mut BinderRegistry,
    ) -> Vec<PostCard> {
        self.active = Tab::AllPosts;
        build_all_posts(model, binders)
    }

    /// Switch to one category's view and rebuild its cards.
    ///
    /// An id absent from the current snapshot is a silent no-op render: the
    /// card list (and every binding) is cleared, nothing is built, and the
    /// tab still moves to `Category(id)`.
    pub fn select_category(
        &mut self,
        id: i64,
        model: &FeedModel,
        binders: &mut BinderRegistry,
    ) -> Vec<PostCard> {
        self.active = Tab::Category(id);
        match model.category(id) {
            Ok(category) => build_category(category, binders),
            Err(e) => {
                tracing::debug!(category_id = id, error = %e, "Tab selected an absent category");
                binders.clear();
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FeedSnapshot;

    fn model() -> FeedModel {
        FeedModel::new(
            serde_json::from_str(
                r#"{"categories":[
                    {"id":1,"name":"General","posts":[
                        {"id":10,"username":"ada","content":"a","created_at":"2024-01-01T00:00:00Z"}
                    ]},
                    {"id":2,"name":"Help","posts":[]}
                ]}"#,
            )
            .unwrap(),
        )
    }

    #[test]
    fn starts_on_all_posts() {
        assert_eq!(TabController::new().active(), Tab::AllPosts);
    }

    #[test]
    fn selecting_a_category_rebuilds_its_cards() {
        let model = model();
        let mut binders = BinderRegistry::new();
        let mut tabs = TabController::new();

        let cards = tabs.select_category(1, &model, &mut binders);
        assert_eq!(tabs.active(), Tab::Category(1));
        assert_eq!(cards.len(), 1);
        assert_eq!(binders.len(), 1);
    }

    #[test]
    fn absent_category_is_a_silent_no_op_render() {
        let model = model();
        let mut binders = BinderRegistry::new();
        let mut tabs = TabController::new();

        // Populate first so we can observe the clear.
        tabs.select_all_posts(&model, &mut binders);
        assert_eq!(binders.len(), 1);

        let cards = tabs.select_category(99, &model, &mut binders);
        assert!(cards.is_empty());
        assert!(binders.is_empty());
        assert_eq!(tabs.active(), Tab::Category(99));
    }

    #[test]
    fn returning_to_all_posts_rebuilds_the_flat_view() {
        let model = model();
        let mut binders = BinderRegistry::new();
        let mut tabs = TabController::new();

        tabs.select_category(2, &model, &mut binders);
        let cards = tabs.select_all_posts(&model, &mut binders);
        assert_eq!(tabs.active(), Tab::AllPosts);
        assert_eq!(cards.len(), 1);
    }
}

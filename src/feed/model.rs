//! In-memory feed model.
//!
//! Owns the one live [`FeedSnapshot`] and exposes the two read views the UI
//! renders from: all posts across categories (newest first) and the posts of
//! a single category. The snapshot is only ever replaced wholesale, so the
//! views never observe a partially updated graph.

use crate::feed::types::{Category, FeedSnapshot, Post};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// No category with this id exists in the current snapshot.
    #[error("category {0} not found in the current snapshot")]
    NotFound(i64),
}

/// A post paired with the name of its owning category, as the all-posts view
/// displays it. Borrows from the model's snapshot.
#[derive(Debug, Clone, Copy)]
pub struct PostRef<'a> {
    pub post: &'a Post,
    pub category_name: &'a str,
}

/// Holder of the last-fetched category→post→comment graph.
#[derive(Debug, Default)]
pub struct FeedModel {
    snapshot: FeedSnapshot,
}

impl FeedModel {
    pub fn new(snapshot: FeedSnapshot) -> Self {
        Self { snapshot }
    }

    /// Replace the held snapshot wholesale. A failed fetch never reaches
    /// this point, so a previously held snapshot survives fetch errors.
    pub fn replace(&mut self, snapshot: FeedSnapshot) {
        self.snapshot = snapshot;
    }

    /// Categories in snapshot order (the order the tab row shows them).
    pub fn categories(&self) -> &[Category] {
        &self.snapshot.categories
    }

    /// All posts across every category, newest first.
    ///
    /// The sort is stable: posts with equal `created_at` keep their snapshot
    /// encounter order (category order, then post order within the category).
    pub fn all_posts(&self) -> Vec<PostRef<'_>> {
        let mut posts: Vec<PostRef<'_>> = self
            .snapshot
            .categories
            .iter()
            .flat_map(|category| {
                category.posts.iter().map(|post| PostRef {
                    post,
                    category_name: &category.name,
                })
            })
            .collect();
        posts.sort_by(|a, b| b.post.created_at.cmp(&a.post.created_at));
        posts
    }

    /// Look up one category by id.
    pub fn category(&self, id: i64) -> Result<&Category, ModelError> {
        self.snapshot
            .categories
            .iter()
            .find(|c| c.id == id)
            .ok_or(ModelError::NotFound(id))
    }
}

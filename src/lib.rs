//! Terminal client for a discussion-forum feed.
//!
//! Fetches the category→post→comment graph from the forum service, renders
//! it into navigable cards, and submits like/dislike reactions whose
//! server-confirmed counts update in place.

pub mod api;
pub mod app;
pub mod config;
pub mod feed;
pub mod theme;
pub mod ui;

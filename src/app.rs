//! Application state.
//!
//! `App` owns the one live feed model, the reaction binder registry, the tab
//! controller, and the cards of the currently rendered view. There is no
//! ambient/global snapshot: everything the UI reads hangs off this struct.

use crate::api::ApiClient;
use crate::feed::{FeedModel, Reaction, ReactionKind};
use crate::theme::StyleMap;
use crate::ui::binder::{BinderRegistry, BindingKey};
use crate::ui::cards::PostCard;
use crate::ui::tabs::{Tab, TabController};
use ratatui::style::Style;
use tokio::sync::mpsc;

/// Events from background tasks, delivered to the UI event loop.
#[derive(Debug)]
pub enum AppEvent {
    /// A reaction submit succeeded; `reactions` is the server's
    /// authoritative post-toggle set for the target.
    ReactionConfirmed {
        key: BindingKey,
        generation: u64,
        token: u64,
        reactions: Vec<Reaction>,
    },
    /// A reaction submit failed; displayed counts must stay unchanged.
    ReactionFailed { key: BindingKey, error: String },
}

pub struct App {
    pub client: ApiClient,
    pub model: FeedModel,
    pub binders: BinderRegistry,
    pub tabs: TabController,
    /// Cards of the currently rendered view, rebuilt as a whole on every
    /// tab switch.
    pub cards: Vec<PostCard>,
    /// Reactable elements in display order (each post, then its comments).
    /// `selected` indexes into this.
    pub focus_order: Vec<BindingKey>,
    pub selected: usize,
    pub styles: StyleMap,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(client: ApiClient, model: FeedModel, styles: StyleMap) -> Self {
        Self {
            client,
            model,
            binders: BinderRegistry::new(),
            tabs: TabController::new(),
            cards: Vec::new(),
            focus_order: Vec::new(),
            selected: 0,
            styles,
            needs_redraw: true,
        }
    }

    /// Resolve a theme role to its style.
    pub fn style(&self, role: &str) -> Style {
        self.styles.resolve(role)
    }

    fn after_render(&mut self) {
        self.focus_order = self
            .cards
            .iter()
            .flat_map(|card| {
                std::iter::once(card.key).chain(card.comments.iter().map(|c| c.key))
            })
            .collect();
        self.selected = 0;
        self.needs_redraw = true;
    }

    /// Switch to the all-posts ("My Feed") view.
    pub fn select_all_posts(&mut self) {
        self.cards = self.tabs.select_all_posts(&self.model, &mut self.binders);
        self.after_render();
    }

    /// Switch to one category's view.
    pub fn select_category(&mut self, id: i64) {
        self.cards = self.tabs.select_category(id, &self.model, &mut self.binders);
        self.after_render();
    }

    /// Switch to the category at `position` in the tab row (0-based over the
    /// snapshot's category order). Out-of-range positions do nothing.
    pub fn select_category_at(&mut self, position: usize) {
        if let Some(id) = self.model.categories().get(position).map(|c| c.id) {
            self.select_category(id);
        }
    }

    /// Index of the active tab in the tab row: 0 = "My Feed", then the
    /// categories in snapshot order. A category id absent from the snapshot
    /// has no tab, so nothing is highlighted for it.
    pub fn active_tab_index(&self) -> Option<usize> {
        match self.tabs.active() {
            Tab::AllPosts => Some(0),
            Tab::Category(id) => self
                .model
                .categories()
                .iter()
                .position(|c| c.id == id)
                .map(|pos| pos + 1),
        }
    }

    /// Cycle to the next tab (wrapping past the last category to "My Feed").
    pub fn next_tab(&mut self) {
        let tab_count = self.model.categories().len() + 1;
        let next = (self.active_tab_index().unwrap_or(0) + 1) % tab_count;
        self.select_tab_at(next);
    }

    /// Cycle to the previous tab.
    pub fn prev_tab(&mut self) {
        let tab_count = self.model.categories().len() + 1;
        let prev = (self.active_tab_index().unwrap_or(0) + tab_count - 1) % tab_count;
        self.select_tab_at(prev);
    }

    fn select_tab_at(&mut self, index: usize) {
        if index == 0 {
            self.select_all_posts();
        } else {
            self.select_category_at(index - 1);
        }
    }

    /// Title of the active view, shown on the feed panel border.
    pub fn active_title(&self) -> String {
        match self.tabs.active() {
            Tab::AllPosts => "My Feed".to_string(),
            Tab::Category(id) => self
                .model
                .category(id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|_| format!("Category {id}")),
        }
    }

    /// Move selection down one reactable element.
    pub fn select_next(&mut self) {
        if !self.focus_order.is_empty() {
            self.selected = (self.selected + 1).min(self.focus_order.len() - 1);
        }
    }

    /// Move selection up one reactable element.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// The reactable element under the cursor.
    pub fn selected_key(&self) -> Option<BindingKey> {
        self.focus_order.get(self.selected).copied()
    }

    /// Submit a reaction for the selected element.
    ///
    /// Issues a request token through the binder and hands the network call
    /// to a background task; the result comes back as an [`AppEvent`]. Each
    /// click issues its own request — there is no debouncing.
    pub fn react(&mut self, reaction: ReactionKind, event_tx: &mpsc::Sender<AppEvent>) {
        let Some(key) = self.selected_key() else {
            return;
        };
        if let Some(ticket) = self.binders.issue(key) {
            tracing::debug!(
                target_id = key.target_id,
                kind = %key.kind,
                reaction = reaction.as_i64(),
                token = ticket.token,
                "Submitting reaction"
            );
            crate::ui::binder::spawn_submit(
                self.client.clone(),
                ticket,
                reaction,
                event_tx.clone(),
            );
        }
    }
}

//! Render functions for the TUI.
//!
//! Draws the category tab row, the feed card list for the active view, and
//! the status bar. Drawing is read-only: cards come from the last
//! materialization, live reaction counts come from the binder registry.

use crate::app::App;
use crate::ui::cards::{CommentCard, PostCard};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use super::status;

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 40;
pub(super) const MIN_HEIGHT: u16 = 8;

/// Main render dispatch function.
pub(super) fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Guard against zero-width/height to prevent panics
    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_tab_row(f, app, chunks[0]);
    render_feed(f, app, chunks[1]);
    status::render(f, app, chunks[2]);
}

/// Render the category tab row: "My Feed" plus one tab per category in
/// snapshot order.
fn render_tab_row(f: &mut Frame, app: &App, area: Rect) {
    let mut titles = vec![Line::from("My Feed")];
    titles.extend(
        app.model
            .categories()
            .iter()
            .map(|c| Line::from(c.name.clone())),
    );

    let tabs = Tabs::new(titles)
        .select(app.active_tab_index())
        .style(app.style("tab_inactive"))
        .highlight_style(app.style("tab_active"));

    f.render_widget(tabs, area);
}

/// Render the feed card list for the active view.
fn render_feed(f: &mut Frame, app: &App, area: Rect) {
    let text_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = if app.cards.is_empty() {
        vec![ListItem::new("No posts")]
    } else {
        let mut items = Vec::with_capacity(app.focus_order.len());
        for card in &app.cards {
            items.push(post_item(app, card, text_width));
            for comment in &card.comments {
                items.push(comment_item(app, comment, text_width));
            }
        }
        items
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("panel_border"))
                .title(format!(" {} ", app.active_title())),
        )
        .highlight_style(app.style("card_selected"));

    let selected = if app.cards.is_empty() {
        None
    } else {
        Some(app.selected)
    };
    let mut state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list, area, &mut state);
}

fn post_item<'a>(app: &App, card: &'a PostCard, width: usize) -> ListItem<'a> {
    let tally = app.binders.tally(card.key).unwrap_or_default();

    let mut lines = vec![Line::styled(
        truncate_to_width(&card.header, width),
        app.style("post_header"),
    )];
    if !card.title.is_empty() {
        lines.push(Line::styled(
            truncate_to_width(&card.title, width),
            app.style("post_title"),
        ));
    }
    lines.push(Line::styled(
        truncate_to_width(&card.content, width),
        app.style("post_body"),
    ));
    lines.push(Line::from(vec![
        Span::styled(card.timestamp.clone(), app.style("post_time")),
        Span::raw("  "),
        Span::styled(format!("▲ {}", tally.likes), app.style("reaction_like")),
        Span::raw("  "),
        Span::styled(
            format!("▼ {}", tally.dislikes),
            app.style("reaction_dislike"),
        ),
    ]));
    lines.push(Line::from(""));

    ListItem::new(lines)
}

fn comment_item<'a>(app: &App, comment: &'a CommentCard, width: usize) -> ListItem<'a> {
    let tally = app.binders.tally(comment.key).unwrap_or_default();
    let inner = width.saturating_sub(4);

    let lines = vec![
        Line::from(vec![
            Span::raw("  └ "),
            Span::styled(comment.username.clone(), app.style("comment_user")),
            Span::styled(
                format!(" · {}", comment.timestamp),
                app.style("comment_time"),
            ),
        ]),
        Line::styled(
            format!("    {}", truncate_to_width(&comment.content, inner)),
            app.style("comment_body"),
        ),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("▲ {}", tally.likes), app.style("reaction_like")),
            Span::raw("  "),
            Span::styled(
                format!("▼ {}", tally.dislikes),
                app.style("reaction_dislike"),
            ),
        ]),
        Line::from(""),
    ];

    ListItem::new(lines)
}

/// Truncate a string to a display width, appending an ellipsis when content
/// was cut. Width-aware so wide (CJK) characters do not overflow the panel.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let first_line = s.lines().next().unwrap_or("");
    let mut width = 0;
    let mut out = String::new();
    for ch in first_line.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        width += w;
        out.push(ch);
    }
    if s.lines().nth(1).is_some() {
        out.push('…');
    }
    out
}

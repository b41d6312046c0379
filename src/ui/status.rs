use crate::app::App;
use ratatui::{layout::Rect, widgets::Paragraph, Frame};

/// Render the status bar: post count for the active view plus key hints.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let text = format!(
        " {} post{} | [j/k]select [Tab]category [0]my feed [l]ike [d]islike [q]uit",
        app.cards.len(),
        if app.cards.len() == 1 { "" } else { "s" },
    );

    let paragraph = Paragraph::new(text).style(app.style("status_bar"));
    f.render_widget(paragraph, area);
}

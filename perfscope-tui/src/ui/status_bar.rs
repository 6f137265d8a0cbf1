//! Bottom status bar — key hints plus the last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, StatusLevel};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " 1:Waterfall 2:Call Tree 3:Flame Graph Tab:Cycle q:Quit",
        app.theme.muted(),
    ));

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => app.theme.text(),
            StatusLevel::Warning => ratatui::style::Style::default().fg(app.theme.warning),
            StatusLevel::Error => ratatui::style::Style::default().fg(app.theme.negative),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

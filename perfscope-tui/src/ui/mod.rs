//! Top-level layout — toolbar tab bar, details pane, status bar.

pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_toolbar(f, chunks[0], app);
    draw_details_pane(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);
}

/// The view-toggle buttons, checked one highlighted.
fn draw_toolbar(f: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = vec![Span::styled(" perfscope ", app.theme.panel_title())];
    for (i, button) in app.details.toolbar().buttons().iter().enumerate() {
        spans.push(Span::styled(
            format!(" {} {} ", i + 1, title_for(button.label())),
            app.theme.tab(button.is_checked()),
        ));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// The deck area: bordered block around whichever subview is visible.
fn draw_details_pane(f: &mut Frame, area: Rect, app: &App) {
    let title = app
        .details
        .selected_view_name()
        .map(title_for)
        .unwrap_or_else(|| "Details".to_string());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.panel_border())
        .title(format!(" {title} "))
        .title_style(app.theme.panel_title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    match app.details.selected_view_name() {
        Some("waterfall") => app.waterfall.render(f, inner, &app.theme),
        Some("calltree") => app.calltree.render(f, inner, &app.theme),
        Some("flamegraph") => app.flamegraph.render(f, inner, &app.theme),
        _ => {
            f.render_widget(
                Paragraph::new("no view selected").style(app.theme.muted()),
                inner,
            );
        }
    }
}

/// Display title for a view-name.
pub fn title_for(name: &str) -> String {
    match name {
        "waterfall" => "Waterfall".to_string(),
        "calltree" => "Call Tree".to_string(),
        "flamegraph" => "Flame Graph".to_string(),
        other => other.to_string(),
    }
}

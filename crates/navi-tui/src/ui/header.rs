use crate::ui::app::Screen;
use navi_core::{
    connections::ConnectionFilter,
    settings::Settings,
    theme::{Element, Theme},
    users::TeamRoster,
};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::Span,
    widgets::{block::Title, Block, Borders, Paragraph},
};

pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    settings: &Settings,
    screen: Screen,
    roster: &TeamRoster,
    filter: &ConnectionFilter,
) {
    let title = Title::from(" Navi v0.1.0 ").alignment(Alignment::Left);

    // The summary mirrors the tab strip of whichever screen is active.
    let summary = match screen {
        Screen::Users => format!(
            "{} :: {} | All Users ({}) | Unassigned ({}) | Groups ({})",
            settings.workspace_name,
            screen.label(),
            roster.len(),
            roster.unassigned_count(),
            roster.group_count(),
        ),
        Screen::Connections => format!(
            "{} :: {} | Category: {} | Status: {} | Sort: {}",
            settings.workspace_name,
            screen.label(),
            filter.category_label(),
            filter.status_label(),
            filter.sort.label(),
        ),
    };

    let status_span = Span::styled(summary, theme.accent_style());

    let header_paragraph = Paragraph::new(status_span)
        .style(theme.ratatui_style(Element::Text))
        .alignment(Alignment::Left)
        .block(
            Block::new()
                .borders(Borders::ALL)
                .title(title)
                .style(theme.ratatui_style(Element::Text)),
        );

    frame.render_widget(header_paragraph, area);
}

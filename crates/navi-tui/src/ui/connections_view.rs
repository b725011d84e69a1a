use navi_core::{
    connections::{Connection, ConnectionFilter, ConnectionStatus, CATEGORIES},
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};
use std::collections::HashMap;

pub struct ConnectionsParams<'a> {
    pub theme: &'a Theme,
    pub filter: &'a ConnectionFilter,
    pub rows: &'a [Connection],
    pub selected: usize,
    /// Display-only availability overrides keyed by connection name.
    pub toggles: &'a HashMap<String, bool>,
    pub details: bool,
}

pub fn render_connections(frame: &mut Frame, area: Rect, params: ConnectionsParams) {
    let block = Block::new()
        .title(" Connections ")
        .borders(Borders::ALL)
        .style(params.theme.text_style());

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Category strip
            Constraint::Min(0),    // Cards
        ])
        .split(inner_area);

    render_category_strip(frame, chunks[0], params.theme, params.filter);

    if params.rows.is_empty() {
        let empty = Paragraph::new("No connections match your filters.")
            .style(params.theme.ratatui_style(Element::Inactive))
            .alignment(Alignment::Center);
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = params
        .rows
        .iter()
        .enumerate()
        .map(|(i, connection)| {
            ListItem::new(connection_line(
                params.theme,
                connection,
                i == params.selected,
                params.toggles,
            ))
        })
        .collect();
    let list = List::new(items).style(params.theme.text_style());
    frame.render_widget(list, chunks[1]);

    if params.details {
        if let Some(connection) = params.rows.get(params.selected) {
            render_details_modal(frame, area, params.theme, connection);
        }
    }
}

fn render_category_strip(frame: &mut Frame, area: Rect, theme: &Theme, filter: &ConnectionFilter) {
    let mut spans = Vec::new();
    let active = filter.category_label();
    for category in std::iter::once("All").chain(CATEGORIES) {
        let style = if category == active {
            theme.accent_style()
        } else {
            theme.ratatui_style(Element::Inactive)
        };
        spans.push(Span::styled(format!(" {} ", category), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn connection_line(
    theme: &Theme,
    connection: &Connection,
    is_selected: bool,
    toggles: &HashMap<String, bool>,
) -> Line<'static> {
    let base = if is_selected {
        theme.highlight_style()
    } else {
        theme.text_style()
    };
    let enabled = toggles
        .get(&connection.name)
        .copied()
        .unwrap_or(connection.available);
    let (switch, switch_style) = if enabled {
        ("[on] ", theme.accent_style())
    } else {
        ("[off]", theme.ratatui_style(Element::Inactive))
    };
    let status_style = match connection.status {
        ConnectionStatus::Active => theme.accent_style(),
        ConnectionStatus::Inactive => theme.ratatui_style(Element::Inactive),
        ConnectionStatus::ComingSoon => theme.warning_style(),
    };
    let last_used = connection
        .last_used
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "never".to_string());

    let marker = if is_selected { "› " } else { "  " };
    Line::from(vec![
        Span::styled(marker.to_string(), base),
        Span::styled(switch.to_string(), switch_style),
        Span::styled(
            format!(" {:<24}", connection.name),
            base.add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{:<12}", connection.status.label()), status_style),
        Span::styled(
            format!("{:<28}", connection.credits),
            theme.ratatui_style(Element::Inactive),
        ),
        Span::styled(format!("{:<12}", last_used), base),
        Span::styled(connection.category.clone(), theme.info_style()),
    ])
}

fn render_details_modal(frame: &mut Frame, area: Rect, theme: &Theme, connection: &Connection) {
    let width = 60.min(area.width);
    let height = 10.min(area.height);
    let modal_area = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );
    frame.render_widget(Clear, modal_area);

    let block = Block::new()
        .title(format!(" {} ", connection.name))
        .borders(Borders::ALL)
        .style(theme.text_style());
    let inner_area = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let last_used = connection
        .last_used
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "never".to_string());
    let lines = vec![
        Line::from(vec![
            Span::styled("Description: ", theme.accent_style()),
            Span::styled(connection.description.clone(), theme.text_style()),
        ]),
        Line::from(vec![
            Span::styled("Credits: ", theme.accent_style()),
            Span::styled(connection.credits.clone(), theme.text_style()),
        ]),
        Line::from(vec![
            Span::styled("Status: ", theme.accent_style()),
            Span::styled(connection.status.label(), theme.text_style()),
        ]),
        Line::from(vec![
            Span::styled("Last Used: ", theme.accent_style()),
            Span::styled(last_used, theme.text_style()),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            "[ESC] Close",
            theme.ratatui_style(Element::Inactive),
        ))
        .alignment(Alignment::Center),
    ];
    let paragraph = Paragraph::new(lines)
        .style(theme.text_style())
        .wrap(ratatui::widgets::Wrap { trim: true });
    frame.render_widget(paragraph, inner_area);
}

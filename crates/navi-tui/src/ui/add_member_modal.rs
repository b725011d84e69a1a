use crate::ui::app::AddMemberState;
use navi_core::{
    theme::{Element, Theme},
    users::UserItem,
};
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub struct AddMemberParams<'a> {
    pub theme: &'a Theme,
    pub state: &'a AddMemberState,
    /// Users outside the target group, narrowed by the picker's search.
    pub candidates: &'a [UserItem],
}

pub fn render_add_member_modal(frame: &mut Frame, area: Rect, params: AddMemberParams) {
    let block = Block::new()
        .title(format!(" Add Member to {} ", params.state.group))
        .borders(Borders::ALL)
        .style(params.theme.text_style());

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Search box
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Candidate list
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    let search_line = Line::from(vec![
        Span::styled("Search member: ", params.theme.accent_style()),
        Span::styled(params.state.search.clone(), params.theme.text_style()),
        Span::styled("_", params.theme.highlight_style()),
    ]);
    frame.render_widget(Paragraph::new(search_line), chunks[0]);

    if params.candidates.is_empty() {
        let empty = Paragraph::new("No users found.")
            .style(params.theme.ratatui_style(Element::Inactive))
            .alignment(Alignment::Center);
        frame.render_widget(empty, chunks[2]);
    } else {
        let cursor = params
            .state
            .cursor
            .min(params.candidates.len().saturating_sub(1));
        let items: Vec<ListItem> = params
            .candidates
            .iter()
            .enumerate()
            .map(|(i, user)| {
                let style = if i == cursor {
                    params.theme.highlight_style()
                } else {
                    params.theme.text_style()
                };
                let checkbox = if params.state.selected.contains(&user.id) {
                    "[x]"
                } else {
                    "[ ]"
                };
                let line = Line::from(vec![
                    Span::styled(format!("{} ", checkbox), style),
                    Span::styled(
                        format!("{:<26}", user.name),
                        style.add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        user.email.clone(),
                        params.theme.ratatui_style(Element::Inactive),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect();
        let list = List::new(items).style(params.theme.text_style());
        frame.render_widget(list, chunks[2]);
    }

    let instructions = format!(
        "{} selected | [↑↓] Navigate | [SPACE] Select | [ENTER] Add | [ESC] Cancel",
        params.state.selected.len()
    );
    let instructions_paragraph = Paragraph::new(instructions)
        .alignment(Alignment::Center)
        .style(params.theme.ratatui_style(Element::Inactive));
    frame.render_widget(instructions_paragraph, chunks[3]);
}

use crate::ui::app::{CreateGroupField, CreateGroupState};
use navi_core::{
    agents,
    theme::{Element, Theme},
    users::UserItem,
};
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub struct CreateGroupParams<'a> {
    pub theme: &'a Theme,
    pub state: &'a CreateGroupState,
    /// Every roster member; any of them can be placed in the new group.
    pub candidates: &'a [UserItem],
}

pub fn render_create_group_modal(frame: &mut Frame, area: Rect, params: CreateGroupParams) {
    let block = Block::new()
        .title(" Create Group ")
        .borders(Borders::ALL)
        .style(params.theme.text_style());

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Credit limit
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Agents
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Member list
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    let field = params.state.field;
    let field_label = |label: &str, active: bool| {
        let style = if active {
            params.theme.highlight_style()
        } else {
            params.theme.accent_style()
        };
        Span::styled(format!("{:<10}", label), style)
    };
    let text_value = |value: &str, active: bool| {
        let mut spans = vec![Span::styled(value.to_owned(), params.theme.text_style())];
        if active {
            spans.push(Span::styled("_", params.theme.highlight_style()));
        }
        spans
    };

    let mut name_line = vec![field_label("Name:", field == CreateGroupField::Name)];
    name_line.extend(text_value(&params.state.name, field == CreateGroupField::Name));
    frame.render_widget(Paragraph::new(Line::from(name_line)), chunks[0]);

    let credit_value = if params.state.credit.is_empty() {
        "0"
    } else {
        params.state.credit.as_str()
    };
    let mut credit_line = vec![field_label("Credit:", field == CreateGroupField::Credit)];
    credit_line.push(Span::styled("$", params.theme.text_style()));
    credit_line.extend(text_value(credit_value, field == CreateGroupField::Credit));
    frame.render_widget(Paragraph::new(Line::from(credit_line)), chunks[1]);

    let mut agent_spans = vec![field_label("Agents:", field == CreateGroupField::Agents)];
    for (i, agent) in agents::ROSTER.iter().enumerate() {
        let style = if field == CreateGroupField::Agents && i == params.state.agent_cursor {
            params.theme.highlight_style()
        } else {
            params.theme.text_style()
        };
        let checkbox = if params.state.agents.iter().any(|code| code == agent.code) {
            "[x]"
        } else {
            "[ ]"
        };
        agent_spans.push(Span::styled(
            format!("{} {}  ", checkbox, agent.name),
            style,
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(agent_spans)), chunks[3]);

    let member_cursor = params
        .state
        .member_cursor
        .min(params.candidates.len().saturating_sub(1));
    let items: Vec<ListItem> = params
        .candidates
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let style = if field == CreateGroupField::Members && i == member_cursor {
                params.theme.highlight_style()
            } else {
                params.theme.text_style()
            };
            let checkbox = if params.state.members.contains(&user.id) {
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
    frame.render_widget(list, chunks[5]);

    let instructions = format!(
        "{} selected | [TAB] Next Field | [↑↓] Navigate | [SPACE] Select | [ENTER] Create | [ESC] Cancel",
        params.state.members.len()
    );
    let instructions_paragraph = Paragraph::new(instructions)
        .alignment(Alignment::Center)
        .style(params.theme.ratatui_style(Element::Inactive));
    frame.render_widget(instructions_paragraph, chunks[6]);
}

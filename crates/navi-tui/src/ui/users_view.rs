use navi_core::{
    theme::{Element, Theme},
    users::{Access, MemberStatus, RosterTab, UserItem},
};
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub struct UsersParams<'a> {
    pub theme: &'a Theme,
    pub tab: RosterTab,
    pub rows: &'a [&'a UserItem],
    pub selected: usize,
    pub grouped: &'a [(String, Vec<UserItem>)],
}

pub fn render_users(frame: &mut Frame, area: Rect, params: UsersParams) {
    let block = Block::new()
        .title(" Manage Users ")
        .borders(Borders::ALL)
        .style(params.theme.text_style());

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab strip
            Constraint::Length(1), // Column headers
            Constraint::Min(0),    // Rows
        ])
        .split(inner_area);

    render_tab_strip(frame, chunks[0], params.theme, params.tab);

    match params.tab {
        RosterTab::Groups => render_grouped(frame, chunks[2], &params),
        RosterTab::All | RosterTab::Unassigned => {
            let header = Paragraph::new(format!(
                "  {:<24}{:<28}{:<15}{:<24}{:>10}   {}",
                "NAME", "EMAIL", "ACCESS", "GROUP", "CREDIT", "AGENTS"
            ))
            .style(params.theme.ratatui_style(Element::Inactive));
            frame.render_widget(header, chunks[1]);

            if params.rows.is_empty() {
                render_empty_state(frame, chunks[2], params.theme);
                return;
            }

            let items: Vec<ListItem> = params
                .rows
                .iter()
                .enumerate()
                .map(|(i, user)| {
                    ListItem::new(member_line(
                        params.theme,
                        user,
                        i == params.selected,
                        true,
                    ))
                })
                .collect();
            let list = List::new(items).style(params.theme.text_style());
            frame.render_widget(list, chunks[2]);
        }
    }
}

fn render_tab_strip(frame: &mut Frame, area: Rect, theme: &Theme, active: RosterTab) {
    let mut spans = Vec::new();
    for tab in [RosterTab::All, RosterTab::Unassigned, RosterTab::Groups] {
        let style = if tab == active {
            theme.accent_style()
        } else {
            theme.ratatui_style(Element::Inactive)
        };
        spans.push(Span::styled(format!(" {} ", tab.label()), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_grouped(frame: &mut Frame, area: Rect, params: &UsersParams) {
    let mut items: Vec<ListItem> = Vec::new();
    // Member rows count through the buckets top to bottom, matching the
    // flat row order the cursor walks on this tab.
    let mut row = 0;
    for (name, members) in params.grouped {
        items.push(ListItem::new(Line::from(Span::styled(
            format!("▾ {} ({})", name, members.len()),
            params.theme.title_style(),
        ))));
        for member in members {
            items.push(ListItem::new(member_line(
                params.theme,
                member,
                row == params.selected,
                false,
            )));
            row += 1;
        }
        items.push(ListItem::new(Line::raw("")));
    }
    let list = List::new(items).style(params.theme.text_style());
    frame.render_widget(list, area);
}

fn member_line<'a>(
    theme: &Theme,
    user: &'a UserItem,
    is_selected: bool,
    with_group: bool,
) -> Line<'a> {
    let base = if is_selected {
        theme.highlight_style()
    } else {
        theme.text_style()
    };
    let access_style = match user.access {
        Access::Owner => theme.info_style(),
        Access::Admin => theme.accent_style(),
        Access::Requested => theme.warning_style(),
        Access::SupportAgent | Access::TeamLead => base,
    };

    let marker = if is_selected { "› " } else { "  " };
    let mut spans = vec![
        Span::styled(marker, base),
        Span::styled(format!("{:<24}", user.name), base.add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("{:<28}", user.email),
            theme.ratatui_style(Element::Inactive),
        ),
        Span::styled(format!("{:<15}", user.access.as_str()), access_style),
    ];
    if with_group {
        spans.push(Span::styled(format!("{:<24}", user.group), base));
    }
    spans.push(Span::styled(format!("{:>10}", user.credit.to_string()), base));
    spans.push(Span::styled(format!("   {}", agents_cell(user)), base));
    if user.status == Some(MemberStatus::Pending) {
        spans.push(Span::styled(" • pending", theme.warning_style()));
    }
    Line::from(spans)
}

/// Agent badges: the first two codes plus an overflow marker, the way the
/// dashboard renders the avatar stack.
fn agents_cell(user: &UserItem) -> String {
    if user.agents.is_empty() {
        return "-".to_string();
    }
    let mut cell: Vec<String> = user.agents.iter().take(2).cloned().collect();
    if user.agents.len() > 2 {
        cell.push(format!("+{}", user.agents.len() - 2));
    }
    cell.join(" ")
}

fn render_empty_state(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(
            "Invite your first user",
            theme.accent_style(),
        )),
        Line::from(Span::styled(
            "Add your team members and external users.",
            theme.ratatui_style(Element::Inactive),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

pub fn render_delete_confirm(frame: &mut Frame, area: Rect, theme: &Theme, user: &UserItem) {
    let block = Block::new()
        .title(" Delete User ")
        .borders(Borders::ALL)
        .style(theme.danger_style());

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let question = Paragraph::new(format!("Are you sure you want to delete {}?", user.name))
        .style(theme.text_style())
        .alignment(Alignment::Center);
    frame.render_widget(question, chunks[0]);

    let actions = Paragraph::new("[Y] Delete User | [N] Cancel")
        .style(theme.ratatui_style(Element::Inactive))
        .alignment(Alignment::Center);
    frame.render_widget(actions, chunks[2]);
}

use super::{
    add_member_modal::{render_add_member_modal, AddMemberParams},
    connections_view::{render_connections, ConnectionsParams},
    create_group_modal::{render_create_group_modal, CreateGroupParams},
    footer::render_footer,
    header::render_header,
    settings_modal::render_settings_modal,
    users_view::{render_delete_confirm, render_users, UsersParams},
};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use navi_core::{
    agents,
    connections::{seed_connections, Connection, ConnectionFilter},
    query::matches_search,
    settings::Settings,
    theme::{Element, Theme},
    users::{
        group_members, CreateGroupForm, RosterTab, TeamRoster, UserItem, KNOWN_GROUPS,
        NOT_ASSIGNED,
    },
};
use ratatui::{
    prelude::{Constraint, CrosstermBackend, Direction, Layout, Rect, Terminal},
    widgets::{Block, Borders, Clear},
};
use std::collections::HashMap;
use std::io::Stdout;

/// Top-level screens the dashboard switches between with Tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Users,
    Connections,
}

impl Screen {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Users => "Manage Users",
            Self::Connections => "Connections",
        }
    }

    fn toggle(&self) -> Self {
        match self {
            Self::Users => Self::Connections,
            Self::Connections => Self::Users,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Modal {
    None,
    Settings,
    ConfirmDelete,
    AddMember,
    CreateGroup,
    ConnectionDetails,
}

/// Whether keystrokes go to navigation or to the active search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Normal,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsSelection {
    #[default]
    Workspace,
    Theme,
    Save,
}

impl SettingsSelection {
    pub fn next(&self) -> Self {
        match self {
            Self::Workspace => Self::Theme,
            Self::Theme => Self::Save,
            Self::Save => Self::Workspace, // Loop back to the top
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::Workspace => Self::Save, // Loop back to the bottom
            Self::Theme => Self::Workspace,
            Self::Save => Self::Theme,
        }
    }
}

/// State of the add-member picker while its modal is open.
pub struct AddMemberState {
    pub group: String,
    pub search: String,
    pub selected: Vec<u32>,
    pub cursor: usize,
}

/// Sections of the create-group modal, cycled with Tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateGroupField {
    #[default]
    Name,
    Credit,
    Agents,
    Members,
}

impl CreateGroupField {
    pub fn next(&self) -> Self {
        match self {
            Self::Name => Self::Credit,
            Self::Credit => Self::Agents,
            Self::Agents => Self::Members,
            Self::Members => Self::Name,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::Name => Self::Members,
            Self::Credit => Self::Name,
            Self::Agents => Self::Credit,
            Self::Members => Self::Agents,
        }
    }
}

/// State of the create-group form while its modal is open.
#[derive(Default)]
pub struct CreateGroupState {
    pub field: CreateGroupField,
    pub name: String,
    /// Digits-only credit limit buffer; empty parses as no limit.
    pub credit: String,
    pub agents: Vec<String>,
    pub agent_cursor: usize,
    pub members: Vec<u32>,
    pub member_cursor: usize,
}

pub struct App {
    should_quit: bool,
    theme: Theme,
    settings: Settings,
    screen: Screen,
    modal: Modal,
    input: InputMode,
    roster: TeamRoster,
    roster_tab: RosterTab,
    roster_search: String,
    users_row: usize,
    catalog: Vec<Connection>,
    filter: ConnectionFilter,
    connections_row: usize,
    add_member: Option<AddMemberState>,
    create_group: Option<CreateGroupState>,
    settings_selection: SettingsSelection,
    editing_workspace: bool,
    edit_buffer: String,
    /// View-only availability toggles; never written back to the catalog.
    toggles: HashMap<String, bool>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let theme = Theme::new(settings.theme);
        Self {
            should_quit: false,
            theme,
            settings,
            screen: Screen::Users,
            modal: Modal::None,
            input: InputMode::Normal,
            roster: TeamRoster::seeded(),
            roster_tab: RosterTab::default(),
            roster_search: String::new(),
            users_row: 0,
            catalog: seed_connections(),
            filter: ConnectionFilter::default(),
            connections_row: 0,
            add_member: None,
            create_group: None,
            settings_selection: SettingsSelection::default(),
            editing_workspace: false,
            edit_buffer: String::new(),
            toggles: HashMap::new(),
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.should_quit {
            self.draw(terminal)?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Roster rows for the current tab, narrowed by the search box.
    fn visible_users(&self) -> Vec<&UserItem> {
        self.roster
            .visible(self.roster_tab)
            .into_iter()
            .filter(|user| matches_search(*user, &self.roster_search))
            .collect()
    }

    fn filtered_connections(&self) -> Vec<Connection> {
        self.filter.apply(&self.catalog)
    }

    /// Candidates shown in the add-member picker: everyone outside the
    /// target group, narrowed by the picker's own search box.
    fn add_member_candidates(&self, state: &AddMemberState) -> Vec<UserItem> {
        self.roster
            .candidates_for(&state.group)
            .into_iter()
            .filter(|user| matches_search(*user, &state.search))
            .cloned()
            .collect()
    }

    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        terminal.draw(|frame| {
            let main_layout = Block::new()
                .borders(Borders::NONE)
                .style(self.theme.ratatui_style(Element::Background));

            let area = frame.size();
            frame.render_widget(main_layout, area);

            let app_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(0),
                    Constraint::Length(3),
                ])
                .split(area);

            render_header(
                frame,
                app_chunks[0],
                &self.theme,
                &self.settings,
                self.screen,
                &self.roster,
                &self.filter,
            );
            render_footer(
                frame,
                app_chunks[2],
                &self.theme,
                self.screen,
                self.input == InputMode::Search,
                self.active_search(),
            );

            match self.screen {
                Screen::Users => {
                    let rows = self.visible_users();
                    let selected = self.users_row.min(rows.len().saturating_sub(1));
                    // Grouped over the same filtered rows the cursor walks,
                    // so row N on screen is rows[N].
                    let narrowed: Vec<UserItem> =
                        rows.iter().map(|user| (*user).clone()).collect();
                    let grouped = group_members(&narrowed);
                    render_users(
                        frame,
                        app_chunks[1],
                        UsersParams {
                            theme: &self.theme,
                            tab: self.roster_tab,
                            rows: &rows,
                            selected,
                            grouped: &grouped,
                        },
                    );
                }
                Screen::Connections => {
                    let rows = self.filtered_connections();
                    let selected = self.connections_row.min(rows.len().saturating_sub(1));
                    render_connections(
                        frame,
                        app_chunks[1],
                        ConnectionsParams {
                            theme: &self.theme,
                            filter: &self.filter,
                            rows: &rows,
                            selected,
                            toggles: &self.toggles,
                            details: self.modal == Modal::ConnectionDetails,
                        },
                    );
                }
            }

            match self.modal {
                Modal::Settings => {
                    let modal_area = centered_rect(50, 9, area);
                    frame.render_widget(Clear, modal_area);
                    render_settings_modal(
                        frame,
                        modal_area,
                        &self.settings,
                        &self.theme,
                        self.settings_selection,
                        self.editing_workspace,
                        &self.edit_buffer,
                    );
                }
                Modal::ConfirmDelete => {
                    if let Some(user) = self.roster.pending_delete() {
                        let modal_area = centered_rect(50, 7, area);
                        frame.render_widget(Clear, modal_area);
                        render_delete_confirm(frame, modal_area, &self.theme, user);
                    }
                }
                Modal::AddMember => {
                    if let Some(state) = &self.add_member {
                        let candidates = self.add_member_candidates(state);
                        let modal_area = centered_rect(60, 16, area);
                        frame.render_widget(Clear, modal_area);
                        render_add_member_modal(
                            frame,
                            modal_area,
                            AddMemberParams {
                                theme: &self.theme,
                                state,
                                candidates: &candidates,
                            },
                        );
                    }
                }
                Modal::CreateGroup => {
                    if let Some(state) = &self.create_group {
                        let modal_area = centered_rect(64, 18, area);
                        frame.render_widget(Clear, modal_area);
                        render_create_group_modal(
                            frame,
                            modal_area,
                            CreateGroupParams {
                                theme: &self.theme,
                                state,
                                candidates: self.roster.users(),
                            },
                        );
                    }
                }
                Modal::None | Modal::ConnectionDetails => {}
            }
        })?;
        Ok(())
    }

    fn active_search(&self) -> &str {
        match self.screen {
            Screen::Users => &self.roster_search,
            Screen::Connections => &self.filter.search,
        }
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match self.modal {
                        Modal::Settings => self.handle_settings_key(key.code),
                        Modal::ConfirmDelete => self.handle_confirm_delete_key(key.code),
                        Modal::AddMember => self.handle_add_member_key(key.code),
                        Modal::CreateGroup => self.handle_create_group_key(key.code),
                        Modal::ConnectionDetails => match key.code {
                            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                                self.modal = Modal::None;
                            }
                            _ => {}
                        },
                        Modal::None => match self.input {
                            InputMode::Search => self.handle_search_key(key.code),
                            InputMode::Normal => self.handle_normal_key(key.code),
                        },
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => {
                self.screen = self.screen.toggle();
            }
            KeyCode::Char('t') => {
                self.theme.toggle();
                self.settings.theme = self.theme.variant();
                if let Err(e) = self.settings.save() {
                    tracing::warn!("failed to persist theme preference: {e}");
                }
            }
            KeyCode::Char('s') => {
                self.modal = Modal::Settings;
                self.settings_selection = SettingsSelection::default();
            }
            KeyCode::Char('/') => {
                self.input = InputMode::Search;
            }
            _ => match self.screen {
                Screen::Users => self.handle_users_key(code),
                Screen::Connections => self.handle_connections_key(code),
            },
        }
    }

    fn handle_users_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => {
                self.roster_tab = self.roster_tab.previous();
                self.users_row = 0;
            }
            KeyCode::Right => {
                self.roster_tab = self.roster_tab.next();
                self.users_row = 0;
            }
            KeyCode::Up => {
                self.users_row = self.users_row.saturating_sub(1);
            }
            KeyCode::Down => {
                let count = self.visible_users().len();
                if self.users_row + 1 < count {
                    self.users_row += 1;
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_user_id() {
                    self.roster.request_delete(id);
                    self.modal = Modal::ConfirmDelete;
                }
            }
            KeyCode::Char('a') => {
                // Add-member picker targets the selected member's group.
                let group = self
                    .selected_user_id()
                    .and_then(|id| self.roster.get(id))
                    .map(|user| user.group.clone());
                if let Some(group) = group {
                    if group != NOT_ASSIGNED {
                        self.add_member = Some(AddMemberState {
                            group,
                            search: String::new(),
                            selected: Vec::new(),
                            cursor: 0,
                        });
                        self.modal = Modal::AddMember;
                    }
                }
            }
            KeyCode::Char('g') => {
                self.create_group = Some(CreateGroupState::default());
                self.modal = Modal::CreateGroup;
            }
            // Assign-group dropdown for unassigned members
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                if let Some(id) = self.selected_user_id() {
                    let group = KNOWN_GROUPS[index];
                    self.roster.assign_to_group(&[id], group);
                    tracing::info!(user = id, group, "assigned member to group");
                }
            }
            _ => {}
        }
    }

    fn handle_connections_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => {
                self.filter.previous_category();
                self.connections_row = 0;
            }
            KeyCode::Right => {
                self.filter.next_category();
                self.connections_row = 0;
            }
            KeyCode::Char('f') => {
                self.filter.cycle_status();
                self.connections_row = 0;
            }
            KeyCode::Char('o') => {
                self.filter.sort = self.filter.sort.next();
            }
            KeyCode::Up => {
                self.connections_row = self.connections_row.saturating_sub(1);
            }
            KeyCode::Down => {
                let count = self.filtered_connections().len();
                if self.connections_row + 1 < count {
                    self.connections_row += 1;
                }
            }
            KeyCode::Enter => {
                if !self.filtered_connections().is_empty() {
                    self.modal = Modal::ConnectionDetails;
                }
            }
            KeyCode::Char(' ') => {
                // Display-only toggle; the catalog record stays untouched.
                let rows = self.filtered_connections();
                let selected = self.connections_row.min(rows.len().saturating_sub(1));
                if let Some(connection) = rows.get(selected) {
                    let current = self
                        .toggles
                        .get(&connection.name)
                        .copied()
                        .unwrap_or(connection.available);
                    self.toggles.insert(connection.name.clone(), !current);
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        let buffer = match self.screen {
            Screen::Users => &mut self.roster_search,
            Screen::Connections => &mut self.filter.search,
        };
        match code {
            KeyCode::Char(c) => buffer.push(c),
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Enter | KeyCode::Esc => {
                self.input = InputMode::Normal;
            }
            _ => {}
        }
        self.users_row = 0;
        self.connections_row = 0;
    }

    fn handle_confirm_delete_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('y') | KeyCode::Enter => {
                if let Some(user) = self.roster.pending_delete() {
                    tracing::info!(user = user.id, "deleted member");
                }
                self.roster.confirm_delete();
                self.modal = Modal::None;
                self.users_row = 0;
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.roster.cancel_delete();
                self.modal = Modal::None;
            }
            _ => {}
        }
    }

    fn handle_add_member_key(&mut self, code: KeyCode) {
        let Some(state) = self.add_member.as_ref() else {
            self.modal = Modal::None;
            return;
        };
        let candidates: Vec<u32> = self
            .add_member_candidates(state)
            .iter()
            .map(|user| user.id)
            .collect();

        let Some(state) = self.add_member.as_mut() else {
            return;
        };
        match code {
            KeyCode::Esc => {
                // Closing resets the picker, like reopening the modal fresh.
                self.add_member = None;
                self.modal = Modal::None;
            }
            KeyCode::Up => {
                state.cursor = state.cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                if state.cursor + 1 < candidates.len() {
                    state.cursor += 1;
                }
            }
            KeyCode::Char(' ') => {
                let cursor = state.cursor.min(candidates.len().saturating_sub(1));
                if let Some(&id) = candidates.get(cursor) {
                    if let Some(position) = state.selected.iter().position(|s| *s == id) {
                        state.selected.remove(position);
                    } else {
                        state.selected.push(id);
                    }
                }
            }
            KeyCode::Char(c) => {
                state.search.push(c);
                state.cursor = 0;
            }
            KeyCode::Backspace => {
                state.search.pop();
                state.cursor = 0;
            }
            KeyCode::Enter => {
                let group = state.group.clone();
                let ids = state.selected.clone();
                if !ids.is_empty() {
                    self.roster.assign_to_group(&ids, &group);
                    tracing::info!(count = ids.len(), group = %group, "added members to group");
                }
                self.add_member = None;
                self.modal = Modal::None;
            }
            _ => {}
        }
    }

    fn handle_create_group_key(&mut self, code: KeyCode) {
        let member_count = self.roster.len();
        let Some(state) = self.create_group.as_mut() else {
            self.modal = Modal::None;
            return;
        };
        match code {
            KeyCode::Esc => {
                self.create_group = None;
                self.modal = Modal::None;
            }
            KeyCode::Tab => state.field = state.field.next(),
            KeyCode::BackTab => state.field = state.field.previous(),
            KeyCode::Enter => {
                // Form fields themselves are not validated; only a group
                // name is required to have something to create.
                if !state.name.is_empty() {
                    let form = CreateGroupForm {
                        name: state.name.clone(),
                        credit_limit: state.credit.parse().ok(),
                        agents: state.agents.clone(),
                        members: state.members.clone(),
                    };
                    self.roster.create_group(&form);
                    tracing::info!(
                        group = %form.name,
                        members = form.members.len(),
                        "created group"
                    );
                    self.create_group = None;
                    self.modal = Modal::None;
                }
            }
            _ => match state.field {
                CreateGroupField::Name => match code {
                    KeyCode::Char(c) => state.name.push(c),
                    KeyCode::Backspace => {
                        state.name.pop();
                    }
                    _ => {}
                },
                CreateGroupField::Credit => match code {
                    KeyCode::Char(c) if c.is_ascii_digit() => state.credit.push(c),
                    KeyCode::Backspace => {
                        state.credit.pop();
                    }
                    _ => {}
                },
                CreateGroupField::Agents => match code {
                    KeyCode::Up => {
                        state.agent_cursor = state.agent_cursor.saturating_sub(1);
                    }
                    KeyCode::Down => {
                        if state.agent_cursor + 1 < agents::ROSTER.len() {
                            state.agent_cursor += 1;
                        }
                    }
                    KeyCode::Char(' ') => {
                        let code = agents::ROSTER[state.agent_cursor].code;
                        if let Some(position) =
                            state.agents.iter().position(|picked| picked.as_str() == code)
                        {
                            state.agents.remove(position);
                        } else {
                            state.agents.push(code.to_string());
                        }
                    }
                    _ => {}
                },
                CreateGroupField::Members => match code {
                    KeyCode::Up => {
                        state.member_cursor = state.member_cursor.saturating_sub(1);
                    }
                    KeyCode::Down => {
                        if state.member_cursor + 1 < member_count {
                            state.member_cursor += 1;
                        }
                    }
                    KeyCode::Char(' ') => {
                        let cursor = state.member_cursor.min(member_count.saturating_sub(1));
                        if let Some(user) = self.roster.users().get(cursor) {
                            if let Some(position) =
                                state.members.iter().position(|id| *id == user.id)
                            {
                                state.members.remove(position);
                            } else {
                                state.members.push(user.id);
                            }
                        }
                    }
                    _ => {}
                },
            },
        }
    }

    fn handle_settings_key(&mut self, code: KeyCode) {
        if self.editing_workspace {
            match code {
                KeyCode::Char(c) => self.edit_buffer.push(c),
                KeyCode::Backspace => {
                    self.edit_buffer.pop();
                }
                KeyCode::Enter => {
                    self.settings.workspace_name = self.edit_buffer.clone();
                    self.editing_workspace = false;
                    self.edit_buffer.clear();
                }
                KeyCode::Esc => {
                    self.editing_workspace = false;
                    self.edit_buffer.clear();
                }
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Esc => self.modal = Modal::None,
            KeyCode::Up => {
                self.settings_selection = self.settings_selection.previous();
            }
            KeyCode::Down => {
                self.settings_selection = self.settings_selection.next();
            }
            KeyCode::Left | KeyCode::Right => {
                if self.settings_selection == SettingsSelection::Theme {
                    self.theme.toggle();
                    self.settings.theme = self.theme.variant();
                }
            }
            KeyCode::Enter => match self.settings_selection {
                SettingsSelection::Workspace => {
                    self.editing_workspace = true;
                    self.edit_buffer = self.settings.workspace_name.clone();
                }
                SettingsSelection::Theme => {}
                SettingsSelection::Save => {
                    if let Err(e) = self.settings.save() {
                        tracing::warn!("failed to save settings: {e}");
                    }
                    self.modal = Modal::None;
                }
            },
            KeyCode::Char('s') => {
                if let Err(e) = self.settings.save() {
                    tracing::warn!("failed to save settings: {e}");
                }
                self.modal = Modal::None;
            }
            _ => {}
        }
    }

    fn selected_user_id(&self) -> Option<u32> {
        let rows = self.visible_users();
        if rows.is_empty() {
            return None;
        }
        let selected = self.users_row.min(rows.len() - 1);
        rows.get(selected).map(|user| user.id)
    }
}

/// Helper to center a fixed-size modal within `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    )
}

use crate::ui::app::SettingsSelection;
use navi_core::{
    settings::Settings,
    theme::{Element, Theme, ThemeVariant},
};
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render_settings_modal(
    frame: &mut Frame,
    area: Rect,
    settings: &Settings,
    theme: &Theme,
    selection: SettingsSelection,
    editing_workspace: bool,
    edit_buffer: &str,
) {
    let block = Block::new()
        .title(" Settings ")
        .borders(Borders::ALL)
        .style(theme.ratatui_style(Element::Warning));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Workspace
            Constraint::Length(1), // Theme
            Constraint::Min(0),    // Spacer
            Constraint::Length(1), // Action Text
        ])
        .split(inner_area);

    // Helper to create a setting line
    let create_setting_line = |label: &str, value: &str, is_selected: bool, is_editing: bool| {
        let value_style = if is_selected {
            theme.highlight_style()
        } else {
            theme.text_style()
        };

        let display_value = if is_editing {
            format!("{}_", value) // Add cursor indicator when editing
        } else {
            value.to_owned()
        };

        Line::from(vec![
            Span::styled(
                format!("{:<12}", label),
                theme.warning_style().add_modifier(Modifier::BOLD),
            ),
            Span::styled(display_value, value_style),
        ])
    };

    let workspace_value = if editing_workspace {
        edit_buffer
    } else {
        &settings.workspace_name
    };
    let workspace_line = create_setting_line(
        "Workspace:",
        workspace_value,
        selection == SettingsSelection::Workspace,
        editing_workspace,
    );
    frame.render_widget(Paragraph::new(workspace_line), chunks[0]);

    let theme_value = match settings.theme {
        ThemeVariant::NaviDark => "◄ DARK ►",
        ThemeVariant::NaviLight => "◄ LIGHT ►",
    };
    let theme_line = create_setting_line(
        "Theme:",
        theme_value,
        selection == SettingsSelection::Theme,
        false,
    );
    frame.render_widget(Paragraph::new(theme_line), chunks[1]);

    let action_text = if editing_workspace {
        "[ENTER] Save | [ESC] Cancel"
    } else {
        "[↑↓] Navigate | [←→] Theme | [S]ave changes | [ESC] Return"
    };
    let action_style = if selection == SettingsSelection::Save {
        theme.highlight_style()
    } else {
        theme.ratatui_style(Element::Inactive)
    };
    let action_paragraph = Paragraph::new(action_text)
        .alignment(Alignment::Center)
        .style(action_style);
    frame.render_widget(action_paragraph, chunks[3]);
}

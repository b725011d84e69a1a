use crate::ui::app::Screen;
use navi_core::theme::{Element, Theme};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render_footer(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    screen: Screen,
    searching: bool,
    search: &str,
) {
    let footer_block = Block::default()
        .borders(Borders::ALL)
        .style(theme.border_style());

    let inner_area = footer_block.inner(area);

    let content = if searching {
        Line::from(vec![
            Span::styled("Search: ", theme.accent_style()),
            Span::styled(search, theme.text_style()),
            Span::styled("_", theme.highlight_style()),
        ])
    } else {
        let hints = match screen {
            Screen::Users => {
                "[←→] Tabs | [↑↓] Select | [/] Search | [1-3] Assign Group | [A]dd Member | [G] New Group | [D]elete | [S]ettings | [T]heme | [TAB] Connections | [Q]uit"
            }
            Screen::Connections => {
                "[←→] Category | [F] Status | [O] Sort | [/] Search | [↑↓] Select | [ENTER] Details | [SPACE] Toggle | [S]ettings | [TAB] Users | [Q]uit"
            }
        };
        Line::from(Span::styled(hints, theme.ratatui_style(Element::Inactive)))
            .alignment(Alignment::Center)
    };

    let footer_paragraph = Paragraph::new(content).style(theme.text_style());

    frame.render_widget(footer_block, area);
    frame.render_widget(footer_paragraph, inner_area);
}

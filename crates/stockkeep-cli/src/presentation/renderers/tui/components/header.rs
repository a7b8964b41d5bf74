use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::renderers::tui::app::AppState;

pub(crate) const TITLE: &str = "Stockkeep Inventory";

pub(crate) struct HeaderComponent;

impl Component for HeaderComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(24)])
            .split(inner);

        let title = Paragraph::new(Line::from(Span::styled(
            TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        f.render_widget(title, chunks[0]);

        let toggle = Paragraph::new(Line::from(vec![
            Span::styled("F2 ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                state.workspace.state().toggle_label(),
                Style::default().fg(Color::Cyan),
            ),
        ]))
        .alignment(Alignment::Right);
        f.render_widget(toggle, chunks[1]);
    }
}

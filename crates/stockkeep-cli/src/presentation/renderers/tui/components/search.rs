use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, border_style, place_cursor};
use crate::presentation::renderers::tui::app::{AppState, Focus};

const HINT: &str = "Search items...";

pub(crate) struct SearchComponent;

impl Component for SearchComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focus == Focus::Search;
        let term = state.workspace.state().search_term();

        let line = if term.is_empty() {
            Line::from(Span::styled(HINT, Style::default().fg(Color::DarkGray)))
        } else {
            Line::from(term)
        };

        let widget = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(border_style(focused)),
        );
        f.render_widget(widget, area);

        if focused {
            place_cursor(f, area, term);
        }
    }
}

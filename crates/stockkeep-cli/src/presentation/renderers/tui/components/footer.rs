use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use stockkeep_runtime::Panel;

use super::Component;
use crate::presentation::renderers::tui::app::AppState;

pub(crate) struct FooterComponent;

impl FooterComponent {
    fn hints(panel: Panel) -> &'static str {
        match panel {
            Panel::Form => "Tab next field · Enter save · Ctrl+L clear · F2 list · F5 reload · Esc quit",
            Panel::List => "↑/↓ select · e edit · d delete · Tab search · F2 form · Esc quit",
        }
    }
}

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let footer = Paragraph::new(Line::from(Self::hints(state.panel()))).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(footer, area);
    }
}

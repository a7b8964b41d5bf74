use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use stockkeep_runtime::NoticeLevel;

use super::Component;
use crate::presentation::renderers::tui::app::AppState;

/// One-line toast for the latest notice.
pub(crate) struct NoticeComponent;

impl Component for NoticeComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let Some(active) = &state.notice else {
            return;
        };

        let color = match active.notice.level {
            NoticeLevel::Success => Color::Green,
            NoticeLevel::Info => Color::Cyan,
            NoticeLevel::Error => Color::Red,
        };

        let line = Line::from(Span::styled(
            format!(" {} ", active.notice.message),
            Style::default().fg(Color::Black).bg(color),
        ));
        f.render_widget(Paragraph::new(line), area);
    }
}

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

pub(crate) const WELCOME: &str = "Welcome to the Inventory System";

/// Welcome screen shown before the inventory loads. Needs no app state.
pub(crate) struct SplashComponent;

impl SplashComponent {
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        let text = Text::from(vec![
            Line::from(Span::styled(
                WELCOME,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled("Loading...", Style::default().fg(Color::DarkGray))),
        ]);

        f.render_widget(Paragraph::new(text).alignment(Alignment::Center), chunks[1]);
    }
}

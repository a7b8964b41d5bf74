use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use stockkeep_runtime::FormField;

use super::{Component, border_style, place_cursor};
use crate::presentation::renderers::tui::app::{AppState, Focus};

pub(crate) struct FormComponent;

impl Component for FormComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let view = state.workspace.state();
        let title = match view.edit_target() {
            Some(id) => format!(" Edit Item #{} ", id),
            None => " Register Item ".to_string(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut constraints: Vec<Constraint> =
            FormField::ALL.iter().map(|_| Constraint::Length(3)).collect();
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (field, chunk) in FormField::ALL.iter().zip(chunks.iter()) {
            let focused = state.focus == Focus::Field(*field);
            let text = view.field(*field);
            let widget = Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", field.label()))
                    .border_style(border_style(focused)),
            );
            f.render_widget(widget, *chunk);

            if focused {
                place_cursor(f, *chunk, text);
            }
        }

        let buttons = Line::from(vec![
            Span::styled(
                format!("[ {} ]", view.submit_label()),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("[ Clear ]", Style::default().fg(Color::Gray)),
        ]);
        f.render_widget(Paragraph::new(buttons), chunks[FormField::ALL.len()]);
    }
}

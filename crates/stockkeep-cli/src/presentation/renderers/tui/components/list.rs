use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::{Component, border_style};
use crate::presentation::formatters::item::{
    count_label, empty_placeholder, last_updated_text, stock_text, subtitle,
};
use crate::presentation::renderers::tui::app::{AppState, Focus};
use crate::presentation::view_models::{ItemRowViewModel, StockStatus};

pub(crate) struct ListComponent;

impl ListComponent {
    fn stock_color(status: StockStatus) -> Color {
        match status {
            StockStatus::Normal => Color::Green,
            StockStatus::Low => Color::Yellow,
            StockStatus::Out => Color::Red,
        }
    }

    fn row(row: &ItemRowViewModel) -> ListItem<'static> {
        let dim = Style::default().fg(Color::Gray);
        let text = Text::from(vec![
            Line::from(Span::styled(
                row.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("  {}", subtitle(row.category.as_deref())),
                dim,
            )),
            Line::from(Span::styled(
                format!("  {}", stock_text(row.quantity)),
                Style::default().fg(Self::stock_color(row.status)),
            )),
            Line::from(Span::styled(
                format!("  {}", last_updated_text(&row.last_updated)),
                dim,
            )),
        ]);
        ListItem::new(text)
    }
}

impl Component for ListComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(
                " Items in Inventory ({}) ",
                count_label(state.rows.len())
            ))
            .border_style(border_style(state.focus == Focus::List));

        if state.rows.is_empty() {
            let placeholder = Paragraph::new(Span::styled(
                empty_placeholder(state.filtered),
                Style::default().fg(Color::DarkGray),
            ))
            .block(block);
            f.render_widget(placeholder, area);
            return;
        }

        let items: Vec<ListItem> = state.rows.iter().map(Self::row).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default().with_selected(Some(state.selected));
        f.render_stateful_widget(list, area, &mut list_state);
    }
}

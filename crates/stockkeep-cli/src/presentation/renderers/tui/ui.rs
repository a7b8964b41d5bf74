use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};
use stockkeep_runtime::Panel;

use super::app::AppState;
use super::components::{
    Component, FooterComponent, FormComponent, HeaderComponent, ListComponent, NoticeComponent,
    SearchComponent, SplashComponent,
};

pub(crate) fn draw(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(f.area());

    HeaderComponent.render(f, chunks[0], state);
    SearchComponent.render(f, chunks[1], state);

    match state.panel() {
        Panel::Form => FormComponent.render(f, chunks[2], state),
        Panel::List => ListComponent.render(f, chunks[2], state),
    }

    NoticeComponent.render(f, chunks[3], state);
    FooterComponent.render(f, chunks[4], state);
}

pub(crate) fn draw_splash(f: &mut Frame) {
    let area = f.area();
    SplashComponent.render(f, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::renderers::tui::tui_event::TuiEvent;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use std::time::Duration;
    use stockkeep_runtime::InventoryWorkspace;
    use stockkeep_types::ItemDraft;

    fn screen_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();
        screen_text(terminal.backend().buffer())
    }

    fn app_with(items: &[(&str, &str, &str, &str)]) -> AppState {
        let ws = InventoryWorkspace::open_in_memory().unwrap();
        for (name, category, qty, min) in items {
            ws.repository()
                .insert(&ItemDraft::new(*name, *category, *qty, *min))
                .unwrap();
        }
        AppState::new(ws, Duration::from_secs(4)).unwrap()
    }

    #[test]
    fn test_form_panel_frame() {
        let state = app_with(&[]);
        let screen = render(&state);

        assert!(screen.contains("Stockkeep Inventory"));
        assert!(screen.contains("View Inventory"));
        assert!(screen.contains("Search items..."));
        assert!(screen.contains("Register Item"));
        assert!(screen.contains("Minimum stock"));
        assert!(screen.contains("[ Add Item ]"));
    }

    #[test]
    fn test_list_panel_rows() {
        let mut state = app_with(&[("Widget", "Tools", "10", "5"), ("Nail", "", "0", "")]);
        state.handle(TuiEvent::TogglePanel).unwrap();

        let screen = render(&state);

        assert!(screen.contains("Hide Inventory"));
        assert!(screen.contains("Items in Inventory (2 items)"));
        assert!(screen.contains("Category: Tools"));
        assert!(screen.contains("No category"));
        assert!(screen.contains("Stock: 0"));
        assert!(screen.contains("Last updated: "));
    }

    #[test]
    fn test_list_placeholders() {
        let mut state = app_with(&[]);
        state.handle(TuiEvent::TogglePanel).unwrap();
        assert!(render(&state).contains("No items registered"));

        let mut state = app_with(&[("Widget", "Tools", "10", "5")]);
        state.handle(TuiEvent::TogglePanel).unwrap();
        state.handle(TuiEvent::FocusNext).unwrap();
        for c in "zzz".chars() {
            state.handle(TuiEvent::Input(c)).unwrap();
        }
        assert!(render(&state).contains("No items found"));
    }

    #[test]
    fn test_edit_mode_labels_and_notice() {
        let mut state = app_with(&[("Widget", "Tools", "10", "5")]);
        state.handle(TuiEvent::TogglePanel).unwrap();
        state.handle(TuiEvent::EditSelected).unwrap();

        let screen = render(&state);
        assert!(screen.contains("Edit Item #1"));
        assert!(screen.contains("[ Update Item ]"));

        state.handle(TuiEvent::Submit).unwrap();
        assert!(render(&state).contains("Item updated"));
    }

    #[test]
    fn test_splash_frame() {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(draw_splash).unwrap();
        let screen = screen_text(terminal.backend().buffer());
        assert!(screen.contains("Welcome to the Inventory System"));
    }
}

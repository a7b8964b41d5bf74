use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
};

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState);
}

pub(crate) mod footer;
pub(crate) mod form;
pub(crate) mod header;
pub(crate) mod list;
pub(crate) mod notice;
pub(crate) mod search;
pub(crate) mod splash;

pub(crate) use footer::FooterComponent;
pub(crate) use form::FormComponent;
pub(crate) use header::HeaderComponent;
pub(crate) use list::ListComponent;
pub(crate) use notice::NoticeComponent;
pub(crate) use search::SearchComponent;
pub(crate) use splash::SplashComponent;

pub(crate) fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Put the terminal cursor at the end of `text` inside a bordered box.
pub(crate) fn place_cursor(f: &mut Frame, area: Rect, text: &str) {
    f.set_cursor_position(cursor_position(area, text));
}

/// Clamped to the last column inside the border, however long `text` is.
pub(crate) fn cursor_position(area: Rect, text: &str) -> (u16, u16) {
    let len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let x = area.x.saturating_add(1).saturating_add(len);
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    (x.min(max_x), area.y.saturating_add(1))
}

use std::time::{Duration, Instant};

use anyhow::Result;
use stockkeep_runtime::{
    FormField, Intent, InventoryWorkspace, Listing, Notice, Panel, Refresh,
};

use super::tui_event::TuiEvent;
use crate::presentation::presenters::present_rows;
use crate::presentation::view_models::ItemRowViewModel;

/// Where keystrokes go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Search,
    Field(FormField),
    List,
}

impl Focus {
    /// Default focus when `panel` comes forward.
    pub fn entering(panel: Panel) -> Self {
        match panel {
            Panel::Form => Focus::Field(FormField::Name),
            Panel::List => Focus::List,
        }
    }

    fn next(self, panel: Panel) -> Self {
        match (panel, self) {
            (Panel::Form, Focus::Search) => Focus::Field(FormField::Name),
            (Panel::Form, Focus::Field(FormField::MinStock)) => Focus::Search,
            (Panel::Form, Focus::Field(field)) => Focus::Field(field.next()),
            (Panel::List, Focus::Search) => Focus::List,
            _ => Focus::Search,
        }
    }

    fn previous(self, panel: Panel) -> Self {
        match (panel, self) {
            (Panel::Form, Focus::Search) => Focus::Field(FormField::MinStock),
            (Panel::Form, Focus::Field(FormField::Name)) => Focus::Search,
            (Panel::Form, Focus::Field(field)) => Focus::Field(field.previous()),
            (Panel::List, Focus::Search) => Focus::List,
            _ => Focus::Search,
        }
    }
}

pub(crate) struct ActiveNotice {
    pub notice: Notice,
    shown_at: Instant,
}

/// UI state layered over the workspace: focus, selection and the notice.
pub(crate) struct AppState {
    pub workspace: InventoryWorkspace,
    pub focus: Focus,
    pub rows: Vec<ItemRowViewModel>,
    pub filtered: bool,
    pub selected: usize,
    pub notice: Option<ActiveNotice>,
    pub should_quit: bool,
    notice_ttl: Duration,
}

impl AppState {
    pub fn new(workspace: InventoryWorkspace, notice_ttl: Duration) -> Result<Self> {
        let initial = workspace.refresh()?;
        let mut state = Self {
            focus: Focus::entering(workspace.state().panel()),
            workspace,
            rows: Vec::new(),
            filtered: false,
            selected: 0,
            notice: None,
            should_quit: false,
            notice_ttl,
        };
        state.apply(initial);
        Ok(state)
    }

    pub fn panel(&self) -> Panel {
        self.workspace.state().panel()
    }

    pub fn handle(&mut self, event: TuiEvent) -> Result<()> {
        match event {
            TuiEvent::Quit => self.should_quit = true,
            TuiEvent::TogglePanel => {
                self.dispatch(Intent::TogglePanel)?;
                self.focus = Focus::entering(self.panel());
            }
            TuiEvent::FocusNext => self.focus = self.focus.next(self.panel()),
            TuiEvent::FocusPrev => self.focus = self.focus.previous(self.panel()),
            TuiEvent::Input(c) => self.input(c)?,
            TuiEvent::Backspace => self.backspace()?,
            TuiEvent::Submit => {
                self.dispatch(Intent::Submit)?;
                if !self.workspace.state().is_editing() && self.workspace.state().form().is_blank() {
                    self.focus = Focus::Field(FormField::Name);
                }
            }
            TuiEvent::ClearForm => self.dispatch(Intent::ClearForm)?,
            TuiEvent::Reload => self.dispatch(Intent::Reload)?,
            TuiEvent::SelectNext => {
                if self.selected + 1 < self.rows.len() {
                    self.selected += 1;
                }
            }
            TuiEvent::SelectPrev => self.selected = self.selected.saturating_sub(1),
            TuiEvent::EditSelected => {
                if let Some(row) = self.rows.get(self.selected) {
                    let id = row.id.into();
                    self.dispatch(Intent::Edit(id))?;
                    self.focus = Focus::entering(self.panel());
                }
            }
            TuiEvent::DeleteSelected => {
                if let Some(row) = self.rows.get(self.selected) {
                    let id = row.id.into();
                    self.dispatch(Intent::Delete(id))?;
                }
            }
        }
        Ok(())
    }

    /// Drop the notice once it has been on screen long enough.
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(active) = &self.notice
            && now.duration_since(active.shown_at) >= self.notice_ttl
        {
            self.notice = None;
        }
    }

    /// Run an intent; rejected input becomes an error notice instead of failing the loop.
    fn dispatch(&mut self, intent: Intent) -> Result<()> {
        match self.workspace.dispatch(intent) {
            Ok(refresh) => self.apply(refresh),
            Err(err) if err.is_validation() => {
                tracing::debug!(error = %err, "form rejected");
                self.show(Notice::error(err.to_string()));
            }
            Err(err) => {
                tracing::error!(error = %err, "store operation failed");
                self.show(Notice::error(err.to_string()));
            }
        }
        Ok(())
    }

    fn apply(&mut self, refresh: Refresh) {
        let Refresh { notice, listing, .. } = refresh;
        self.set_listing(listing);
        if let Some(notice) = notice {
            self.show(notice);
        }
    }

    fn set_listing(&mut self, listing: Listing) {
        self.filtered = listing.is_filtered();
        self.rows = present_rows(&listing.items);
        if self.selected >= self.rows.len() {
            self.selected = self.rows.len().saturating_sub(1);
        }
    }

    fn show(&mut self, notice: Notice) {
        self.notice = Some(ActiveNotice {
            notice,
            shown_at: Instant::now(),
        });
    }

    fn input(&mut self, c: char) -> Result<()> {
        match self.focus {
            Focus::Search => {
                let mut term = self.workspace.state().search_term().to_string();
                term.push(c);
                self.dispatch(Intent::Search(term))?;
            }
            Focus::Field(field) => {
                if field.is_numeric() && !c.is_ascii_digit() {
                    return Ok(());
                }
                self.workspace.state_mut().field_mut(field).push(c);
            }
            Focus::List => {}
        }
        Ok(())
    }

    fn backspace(&mut self) -> Result<()> {
        match self.focus {
            Focus::Search => {
                let mut term = self.workspace.state().search_term().to_string();
                if term.pop().is_some() {
                    self.dispatch(Intent::Search(term))?;
                }
            }
            Focus::Field(field) => {
                self.workspace.state_mut().field_mut(field).pop();
            }
            Focus::List => {}
        }
        Ok(())
    }
}

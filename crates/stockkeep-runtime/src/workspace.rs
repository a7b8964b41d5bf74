use serde::Serialize;
use std::path::Path;
use stockkeep_index::Database;
use stockkeep_types::{Item, ItemId};

use crate::Result;
use crate::repository::ItemRepository;
use crate::view_state::{Panel, ViewState};

// NOTE: Workspace Design Rationale
//
// Why one context object (not globals)?
// - The store handle and view flags live and die together with the app
// - Tests build a workspace over an in-memory store, no UI attached
//
// Why return a Refresh from every command?
// - Mutation then query is explicit: the caller always gets the fresh list
// - Renderers never reach back into the store on their own

/// A user action, as the UI reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Submit,
    Edit(ItemId),
    EditAt(usize),
    Delete(ItemId),
    DeleteAt(usize),
    Search(String),
    TogglePanel,
    ClearForm,
    Reload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// Short transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// The list as it should be rendered right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub items: Vec<Item>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl Listing {
    pub fn is_filtered(&self) -> bool {
        self.filter.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Read model returned after every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refresh {
    pub notice: Option<Notice>,
    pub listing: Listing,
    pub panel: Panel,
    /// Id written by a successful submit.
    pub saved: Option<ItemId>,
}

/// Application context: the repository plus the view state it drives.
pub struct InventoryWorkspace {
    repo: ItemRepository,
    state: ViewState,
}

impl InventoryWorkspace {
    pub fn new(repo: ItemRepository) -> Self {
        Self {
            repo,
            state: ViewState::new(),
        }
    }

    /// Open (creating if needed) the inventory database at `db_path`.
    pub fn open(db_path: &Path) -> Result<Self> {
        let db = Database::open(db_path)?;
        Ok(Self::new(ItemRepository::new(db)))
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(ItemRepository::open_in_memory()?))
    }

    pub fn repository(&self) -> &ItemRepository {
        &self.repo
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Direct access for keystrokes that only touch form text.
    pub fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    pub fn dispatch(&mut self, intent: Intent) -> Result<Refresh> {
        tracing::trace!(?intent, "dispatch");
        match intent {
            Intent::Submit => self.submit(),
            Intent::Edit(id) => self.edit(id),
            Intent::EditAt(position) => self.edit_at(position),
            Intent::Delete(id) => self.delete(id),
            Intent::DeleteAt(position) => self.delete_at(position),
            Intent::Search(term) => self.set_search(term),
            Intent::TogglePanel => self.toggle_panel(),
            Intent::ClearForm => self.clear_form(),
            Intent::Reload => self.refresh(),
        }
    }

    /// Current list under the active filter.
    pub fn load(&self) -> Result<Listing> {
        let filter = self.state.active_filter().map(String::from);
        let items = match &filter {
            Some(term) => self.repo.search(term)?,
            None => self.repo.list_all()?,
        };
        Ok(Listing { items, filter })
    }

    pub fn refresh(&self) -> Result<Refresh> {
        self.refresh_with(None)
    }

    /// Insert or update from the form, then return to create mode.
    ///
    /// A validation error is returned as `Err` and leaves the form and edit
    /// target exactly as they were.
    pub fn submit(&mut self) -> Result<Refresh> {
        let (notice, saved) = match self.state.edit_target() {
            None => {
                let id = self.repo.insert(self.state.form())?;
                (Notice::success("Item added"), Some(id))
            }
            Some(id) => {
                if self.repo.update(id, self.state.form())? {
                    (Notice::success("Item updated"), Some(id))
                } else {
                    (Notice::info("Item no longer exists; nothing was updated"), None)
                }
            }
        };

        self.state.clear_form();
        let mut refresh = self.refresh_with(Some(notice))?;
        refresh.saved = saved;
        Ok(refresh)
    }

    /// Load `id` into the form. A missing id is a no-op.
    pub fn edit(&mut self, id: ItemId) -> Result<Refresh> {
        match self.repo.get(id)? {
            Some(item) => self.state.begin_edit(&item),
            None => tracing::debug!(%id, "edit ignored, item does not exist"),
        }
        self.refresh()
    }

    pub fn edit_at(&mut self, position: usize) -> Result<Refresh> {
        match self.resolve(position)? {
            Some(id) => self.edit(id),
            None => self.refresh(),
        }
    }

    pub fn delete(&mut self, id: ItemId) -> Result<Refresh> {
        let deleted = self.repo.delete(id)?;

        if self.state.edit_target() == Some(id) {
            self.state.clear_form();
        }

        let notice = deleted.then(|| Notice::success("Item deleted"));
        self.refresh_with(notice)
    }

    pub fn delete_at(&mut self, position: usize) -> Result<Refresh> {
        match self.resolve(position)? {
            Some(id) => self.delete(id),
            None => self.refresh(),
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) -> Result<Refresh> {
        self.state.set_search_term(term);
        self.refresh()
    }

    /// Entering the list always comes with a fresh load.
    pub fn toggle_panel(&mut self) -> Result<Refresh> {
        self.state.toggle_panel();
        self.refresh()
    }

    pub fn clear_form(&mut self) -> Result<Refresh> {
        self.state.clear_form();
        self.refresh()
    }

    /// Position in the list the user currently sees (filter applied).
    pub fn resolve(&self, position: usize) -> Result<Option<ItemId>> {
        self.repo
            .resolve_position(position, self.state.active_filter())
    }

    fn refresh_with(&self, notice: Option<Notice>) -> Result<Refresh> {
        Ok(Refresh {
            notice,
            listing: self.load()?,
            panel: self.state.panel(),
            saved: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use stockkeep_types::ItemDraft;
    use crate::view_state::FormField;

    fn fill(ws: &mut InventoryWorkspace, name: &str, category: &str, qty: &str, min: &str) {
        *ws.state_mut().form_mut() = ItemDraft::new(name, category, qty, min);
    }

    fn add(ws: &mut InventoryWorkspace, name: &str, category: &str, qty: &str, min: &str) -> Refresh {
        fill(ws, name, category, qty, min);
        ws.submit().unwrap()
    }

    #[test]
    fn test_submit_in_create_mode_inserts_and_resets() {
        let mut ws = InventoryWorkspace::open_in_memory().unwrap();

        let refresh = add(&mut ws, "Widget", "Tools", "10", "5");

        assert_eq!(refresh.notice, Some(Notice::success("Item added")));
        assert_eq!(refresh.listing.items.len(), 1);
        assert_eq!(refresh.listing.items[0].name, "Widget");
        assert_eq!(refresh.saved, Some(refresh.listing.items[0].id));
        assert!(ws.state().form().is_blank());
        assert_eq!(ws.state().edit_target(), None);
    }

    #[test]
    fn test_submit_with_invalid_form_keeps_state() {
        let mut ws = InventoryWorkspace::open_in_memory().unwrap();
        fill(&mut ws, "X", "", "abc", "");

        let err = ws.submit().unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(ws.state().form(), &ItemDraft::new("X", "", "abc", ""));
        assert!(ws.load().unwrap().is_empty());
    }

    #[test]
    fn test_edit_then_submit_updates_same_id() {
        let mut ws = InventoryWorkspace::open_in_memory().unwrap();
        add(&mut ws, "Widget", "Tools", "10", "5");
        let id = ws.load().unwrap().items[0].id;

        ws.toggle_panel().unwrap();
        let refresh = ws.dispatch(Intent::Edit(id)).unwrap();
        assert_eq!(refresh.panel, Panel::Form);
        assert_eq!(ws.state().edit_target(), Some(id));
        assert_eq!(ws.state().form(), &ItemDraft::new("Widget", "Tools", "10", "5"));

        ws.state_mut().field_mut(FormField::Quantity).clear();
        ws.state_mut().field_mut(FormField::Quantity).push_str("4");
        let refresh = ws.submit().unwrap();

        assert_eq!(refresh.notice, Some(Notice::success("Item updated")));
        assert_eq!(refresh.listing.items.len(), 1);
        assert_eq!(refresh.listing.items[0].id, id);
        assert_eq!(refresh.listing.items[0].quantity, 4);
        assert_eq!(ws.state().edit_target(), None);
    }

    #[test]
    fn test_edit_missing_id_is_noop() {
        let mut ws = InventoryWorkspace::open_in_memory().unwrap();
        fill(&mut ws, "draft", "", "", "");

        let refresh = ws.edit(ItemId::new(42)).unwrap();

        assert_eq!(refresh.notice, None);
        assert_eq!(ws.state().edit_target(), None);
        assert_eq!(ws.state().form().name, "draft");
    }

    #[test]
    fn test_edit_at_uses_filtered_positions() {
        let mut ws = InventoryWorkspace::open_in_memory().unwrap();
        add(&mut ws, "Alpha", "", "1", "");
        add(&mut ws, "Bolt", "Hardware", "3", "5");

        ws.set_search("hard").unwrap();
        ws.dispatch(Intent::EditAt(0)).unwrap();
        assert_eq!(ws.state().form().name, "Bolt");

        ws.clear_form().unwrap();
        let refresh = ws.dispatch(Intent::EditAt(1)).unwrap();
        assert_eq!(refresh.notice, None);
        assert_eq!(ws.state().edit_target(), None);
    }

    #[test]
    fn test_delete_refreshes_listing() {
        let mut ws = InventoryWorkspace::open_in_memory().unwrap();
        add(&mut ws, "Alpha", "", "1", "");
        add(&mut ws, "Bolt", "", "1", "");
        let bolt = ws.load().unwrap().items[1].id;

        let refresh = ws.dispatch(Intent::Delete(bolt)).unwrap();
        assert_eq!(refresh.notice, Some(Notice::success("Item deleted")));
        assert_eq!(refresh.listing.items.len(), 1);

        let refresh = ws.dispatch(Intent::Delete(bolt)).unwrap();
        assert_eq!(refresh.notice, None);
        assert_eq!(refresh.listing.items.len(), 1);
    }

    #[test]
    fn test_delete_at_out_of_range_is_noop() {
        let mut ws = InventoryWorkspace::open_in_memory().unwrap();
        add(&mut ws, "Alpha", "", "1", "");

        let refresh = ws.dispatch(Intent::DeleteAt(5)).unwrap();
        assert_eq!(refresh.notice, None);
        assert_eq!(refresh.listing.items.len(), 1);
    }

    #[test]
    fn test_deleting_edit_target_returns_to_create_mode() {
        let mut ws = InventoryWorkspace::open_in_memory().unwrap();
        add(&mut ws, "Alpha", "", "1", "");
        let id = ws.load().unwrap().items[0].id;

        ws.edit(id).unwrap();
        ws.delete(id).unwrap();

        assert_eq!(ws.state().edit_target(), None);
        assert!(ws.state().form().is_blank());
    }

    #[test]
    fn test_search_filters_listing() {
        let mut ws = InventoryWorkspace::open_in_memory().unwrap();
        add(&mut ws, "Widget", "Tools", "10", "");
        add(&mut ws, "Apple", "Food", "2", "");

        let refresh = ws.dispatch(Intent::Search("TOOL".to_string())).unwrap();
        assert_eq!(refresh.listing.filter.as_deref(), Some("TOOL"));
        assert_eq!(refresh.listing.items.len(), 1);

        let refresh = ws.dispatch(Intent::Search(String::new())).unwrap();
        assert!(!refresh.listing.is_filtered());
        assert_eq!(refresh.listing.items.len(), 2);
    }

    #[test]
    fn test_toggle_into_list_loads_fresh_rows() {
        let mut ws = InventoryWorkspace::open_in_memory().unwrap();
        ws.repository()
            .insert(&ItemDraft::new("Outside", "", "1", ""))
            .unwrap();

        let refresh = ws.dispatch(Intent::TogglePanel).unwrap();
        assert_eq!(refresh.panel, Panel::List);
        assert_eq!(refresh.listing.items.len(), 1);
    }

    #[test]
    fn test_update_of_vanished_item_is_reported_not_failed() {
        let mut ws = InventoryWorkspace::open_in_memory().unwrap();
        add(&mut ws, "Alpha", "", "1", "");
        let id = ws.load().unwrap().items[0].id;

        ws.edit(id).unwrap();
        ws.repository().delete(id).unwrap();
        let refresh = ws.submit().unwrap();

        assert_eq!(refresh.notice.map(|n| n.level), Some(NoticeLevel::Info));
        assert_eq!(refresh.saved, None);
        assert!(refresh.listing.is_empty());
        assert_eq!(ws.state().edit_target(), None);
    }
}

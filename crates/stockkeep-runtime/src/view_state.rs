use serde::Serialize;
use stockkeep_types::{Item, ItemDraft, ItemId};

/// Which of the two mutually exclusive panels is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    #[default]
    Form,
    List,
}

impl Panel {
    pub fn toggled(self) -> Self {
        match self {
            Panel::Form => Panel::List,
            Panel::List => Panel::Form,
        }
    }
}

/// Form fields in the order they are shown and cycled through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Category,
    Quantity,
    MinStock,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Category,
        FormField::Quantity,
        FormField::MinStock,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Category => "Category",
            FormField::Quantity => "Quantity",
            FormField::MinStock => "Minimum stock",
        }
    }

    /// Quantity and minimum stock only take digits.
    pub fn is_numeric(self) -> bool {
        matches!(self, FormField::Quantity | FormField::MinStock)
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// In-memory flags that decide what the UI shows.
///
/// Pure state: no store access happens here. `InventoryWorkspace` drives the
/// transitions and pairs each of them with the matching repository call.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    edit_target: Option<ItemId>,
    search_term: String,
    panel: Panel,
    form: ItemDraft,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit_target(&self) -> Option<ItemId> {
        self.edit_target
    }

    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The search term, or `None` when it is blank.
    pub fn active_filter(&self) -> Option<&str> {
        let term = self.search_term.trim();
        if term.is_empty() { None } else { Some(term) }
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn form(&self) -> &ItemDraft {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ItemDraft {
        &mut self.form
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.form.name,
            FormField::Category => &self.form.category,
            FormField::Quantity => &self.form.quantity,
            FormField::MinStock => &self.form.min_stock,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.form.name,
            FormField::Category => &mut self.form.category,
            FormField::Quantity => &mut self.form.quantity,
            FormField::MinStock => &mut self.form.min_stock,
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Enter edit mode for `item` and bring the form forward.
    pub fn begin_edit(&mut self, item: &Item) {
        self.edit_target = Some(item.id);
        self.form = ItemDraft::from_item(item);
        self.panel = Panel::Form;
    }

    /// Back to create mode with a blank form.
    pub fn clear_form(&mut self) {
        self.edit_target = None;
        self.form.clear();
    }

    /// Flip panels; returns the panel now shown.
    pub fn toggle_panel(&mut self) -> Panel {
        self.panel = self.panel.toggled();
        self.panel
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Item"
        } else {
            "Add Item"
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        match self.panel {
            Panel::Form => "View Inventory",
            Panel::List => "Hide Inventory",
        }
    }
}

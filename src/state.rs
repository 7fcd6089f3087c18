use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Ui state as exchanged with the url: every accessor contributes its own
/// entry, keyed by the accessor key. A BTreeMap keeps the serialized form
/// stable.
pub type UiState = BTreeMap<String, String>;

/// Holds the raw query string under control of the search box.
///
/// Clones share the underlying value: the accessor keeps one handle and gives
/// another one to the selected filter it registers, so that removing the
/// filter also clears the accessor.
#[derive(Debug, Clone, Default)]
pub struct ValueState {
    value: Rc<RefCell<Option<String>>>,
}

impl ValueState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current value. An empty string counts as no value, like an absent
    /// one.
    pub fn get_value(&self) -> Option<String> {
        self.value.borrow().clone().filter(|v| !v.is_empty())
    }

    pub fn set_value<S: Into<String>>(&self, value: S) {
        *self.value.borrow_mut() = Some(value.into());
    }

    pub fn clear(&self) {
        *self.value.borrow_mut() = None;
    }

    pub fn has_value(&self) -> bool {
        self.get_value().is_some()
    }
}

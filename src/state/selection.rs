//! Selected-index state for items lists

use std::fmt;

/// Payload delivered to selection-changed handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    pub old: Option<usize>,
    pub new: Option<usize>,
}

type SelectionHandler = Box<dyn FnMut(SelectionChange)>;

/// Current selection plus the handlers interested in changes to it.
///
/// The index is only written through [`SelectionState::set_selected_index`],
/// which notifies every handler exactly once when the value actually changes.
/// Out-of-range indices are stored as given; readers decide how to treat them.
#[derive(Default)]
pub struct SelectionState {
    selected: Option<usize>,
    handlers: Vec<SelectionHandler>,
}

impl fmt::Debug for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionState")
            .field("selected", &self.selected)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl SelectionState {
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Register a handler called after every change of the selected index
    pub fn on_changed(&mut self, handler: impl FnMut(SelectionChange) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Set the selected index. Returns true if the value changed.
    pub fn set_selected_index(&mut self, index: Option<usize>) -> bool {
        if self.selected == index {
            return false;
        }

        let change = SelectionChange {
            old: self.selected,
            new: index,
        };
        self.selected = index;
        tracing::debug!("selection changed: {:?} -> {:?}", change.old, change.new);

        for handler in &mut self.handlers {
            handler(change);
        }
        true
    }

    /// Move the selection one item down, stopping at the last item.
    /// No selection moves to the first item.
    pub fn select_next(&mut self, item_count: usize) -> bool {
        let next = match self.selected {
            None => 0,
            Some(index) => index + 1,
        };
        if next < item_count {
            self.set_selected_index(Some(next))
        } else {
            false
        }
    }

    /// Move the selection one item up, stopping at the first item
    pub fn select_previous(&mut self) -> bool {
        match self.selected {
            Some(index) if index > 0 => self.set_selected_index(Some(index - 1)),
            _ => false,
        }
    }
}

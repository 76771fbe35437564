//! Shared lifecycle log.

use ascend_dom::NodeId;
use parking_lot::Mutex;
use std::sync::Arc;

/// One recorded lifecycle step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalEntry {
    Constructed { component: String, element: NodeId },
    TornDown { component: String, element: NodeId },
    Callback { component: String, element: NodeId },
}

/// Cloneable handle to a shared log.
///
/// # Borrow Checking Pattern: Interior Mutability
///
/// Factories and components only hold a clone of the journal, so recording
/// goes through a `Mutex` and takes `&self`.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Arc<Mutex<Vec<JournalEntry>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, entry: JournalEntry) {
        self.entries.lock().push(entry);
    }

    pub fn entries(&self) -> Vec<JournalEntry> {
        self.entries.lock().clone()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Elements `component` was constructed on, in order.
    pub fn constructed(&self, component: &str) -> Vec<NodeId> {
        self.entries
            .lock()
            .iter()
            .filter_map(|entry| match entry {
                JournalEntry::Constructed { component: c, element } if c == component => {
                    Some(*element)
                }
                _ => None,
            })
            .collect()
    }

    /// Elements `component` was torn down on, in order.
    pub fn torn_down(&self, component: &str) -> Vec<NodeId> {
        self.entries
            .lock()
            .iter()
            .filter_map(|entry| match entry {
                JournalEntry::TornDown { component: c, element } if c == component => {
                    Some(*element)
                }
                _ => None,
            })
            .collect()
    }

    /// Component names in construction order, across all elements.
    pub fn construction_order(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter_map(|entry| match entry {
                JournalEntry::Constructed { component, .. } => Some(component.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

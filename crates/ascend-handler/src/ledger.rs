//! Ledger of live component instances.
//!
//! The ledger owns every instance. Elements only reach their widgets through
//! the per-element retrieval index, which never keeps an instance alive on
//! its own.

use crate::component::{Component, ComponentLink, InstanceId};
use ascend_core::alloc::HashMap;
use ascend_dom::NodeId;
use indexmap::IndexMap;
use std::rc::Rc;

struct LedgerEntry {
    element: NodeId,
    link: ComponentLink,
    instance: Box<dyn Component>,
}

/// An instance taken out of the ledger.
pub struct RemovedInstance {
    pub element: NodeId,
    pub link: ComponentLink,
    pub instance: Box<dyn Component>,
}

/// Live instances in creation order.
#[derive(Default)]
pub struct InstanceLedger {
    entries: IndexMap<InstanceId, LedgerEntry>,
    widgets: HashMap<NodeId, Vec<(Rc<str>, InstanceId)>>,
    next_id: u64,
}

impl InstanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        element: NodeId,
        link: ComponentLink,
        instance: Box<dyn Component>,
    ) -> InstanceId {
        let id = InstanceId(self.next_id);
        self.next_id += 1;
        self.entries.insert(
            id,
            LedgerEntry {
                element,
                link,
                instance,
            },
        );
        id
    }

    /// Make `id` retrievable from `element` under `name`, replacing any earlier entry.
    pub fn expose_widget(&mut self, element: NodeId, name: Rc<str>, id: InstanceId) {
        let slots = self.widgets.entry(element).or_default();
        match slots.iter_mut().find(|(slot, _)| *slot == name) {
            Some(slot) => slot.1 = id,
            None => slots.push((name, id)),
        }
    }

    /// Take an instance out of the ledger and drop its retrieval entry.
    pub fn remove(&mut self, id: InstanceId) -> Option<RemovedInstance> {
        let entry = self.entries.shift_remove(&id)?;

        if let Some(slots) = self.widgets.get_mut(&entry.element) {
            slots.retain(|(_, slot)| *slot != id);
            if slots.is_empty() {
                self.widgets.remove(&entry.element);
            }
        }

        Some(RemovedInstance {
            element: entry.element,
            link: entry.link,
            instance: entry.instance,
        })
    }

    /// Instances bound to `element`, oldest first.
    pub fn instances_for(&self, element: NodeId) -> Vec<InstanceId> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.element == element)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn get(&self, id: InstanceId) -> Option<&dyn Component> {
        self.entries.get(&id).map(|entry| entry.instance.as_ref())
    }

    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut dyn Component> {
        self.entries.get_mut(&id).map(|entry| entry.instance.as_mut())
    }

    pub fn link(&self, id: InstanceId) -> Option<&ComponentLink> {
        self.entries.get(&id).map(|entry| &entry.link)
    }

    pub fn element(&self, id: InstanceId) -> Option<NodeId> {
        self.entries.get(&id).map(|entry| entry.element)
    }

    /// The widget instance exposed on `element` under `name`.
    pub fn widget_id(&self, element: NodeId, name: &str) -> Option<InstanceId> {
        self.widgets
            .get(&element)?
            .iter()
            .find(|(slot, _)| &**slot == name)
            .map(|(_, id)| *id)
    }

    /// `(id, element, link)` for every live instance, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (InstanceId, NodeId, &ComponentLink)> {
        self.entries
            .iter()
            .map(|(id, entry)| (*id, entry.element, &entry.link))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

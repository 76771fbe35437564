//! Recording components.

use crate::journal::{Journal, JournalEntry};
use ascend_dom::{Document, NodeId};
use ascend_handler::{Component, ComponentRegistration, HandlerError, HandlerResult, UpgradeContext};
use std::any::Any;

/// A component that does nothing but record its own lifecycle.
#[derive(Debug)]
pub struct Probe {
    pub component: String,
    pub element: NodeId,
    /// Free slot tests can mutate through `widget_mut`.
    pub value: u32,
    journal: Journal,
}

impl Probe {
    fn construct(ctx: &UpgradeContext<'_>, journal: &Journal) -> Self {
        journal.record(JournalEntry::Constructed {
            component: ctx.component_name().to_string(),
            element: ctx.element(),
        });
        Probe {
            component: ctx.component_name().to_string(),
            element: ctx.element(),
            value: 0,
            journal: journal.clone(),
        }
    }

    /// Registration for a probe named `name` found on `selector`.
    pub fn registration(name: &str, selector: &str, journal: &Journal) -> ComponentRegistration {
        let journal = journal.clone();
        ComponentRegistration::new(name, selector, move |ctx: &mut UpgradeContext<'_>| {
            Ok(Probe::construct(ctx, &journal))
        })
    }

    /// Registration whose factory upgrades its own element again, by name,
    /// before returning.
    pub fn reentrant(name: &str, selector: &str, journal: &Journal) -> ComponentRegistration {
        let journal = journal.clone();
        ComponentRegistration::new(name, selector, move |ctx: &mut UpgradeContext<'_>| {
            let probe = Probe::construct(ctx, &journal);
            let element = ctx.element();
            let name = ctx.component_name().to_string();
            ctx.upgrade_element(element, Some(name.as_str()))?;
            ctx.upgrade_elements(element)?;
            Ok(probe)
        })
    }

    /// Registration whose factory always fails.
    pub fn failing(name: &str, selector: &str) -> ComponentRegistration {
        ComponentRegistration::new(
            name,
            selector,
            move |ctx: &mut UpgradeContext<'_>| -> HandlerResult<Probe> {
                Err(HandlerError::component_failed(
                    ctx.component_name(),
                    "factory refused to build",
                ))
            },
        )
    }
}

impl Component for Probe {
    fn teardown(&mut self, _document: &mut Document, element: NodeId) {
        self.journal.record(JournalEntry::TornDown {
            component: self.component.clone(),
            element,
        });
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A component that builds child elements during construction and upgrades
/// them itself, the way a data table creates its row checkboxes.
#[derive(Debug)]
pub struct Composite {
    pub children: Vec<NodeId>,
    journal: Journal,
    component: String,
}

impl Composite {
    /// Registration for a composite that appends `count` children carrying
    /// `child_class` and upgrades them before returning.
    pub fn registration(
        name: &str,
        selector: &str,
        child_class: &str,
        count: usize,
        journal: &Journal,
    ) -> ComponentRegistration {
        let journal = journal.clone();
        let child_class = child_class.to_string();
        ComponentRegistration::new(name, selector, move |ctx: &mut UpgradeContext<'_>| {
            journal.record(JournalEntry::Constructed {
                component: ctx.component_name().to_string(),
                element: ctx.element(),
            });

            let parent = ctx.element();
            let children: Vec<NodeId> = (0..count)
                .map(|_| {
                    ctx.document_mut()
                        .build_element("span")
                        .class(child_class.as_str())
                        .child_of(parent)
                        .build()
                })
                .collect();
            ctx.upgrade_elements(&children)?;

            Ok(Composite {
                children,
                journal: journal.clone(),
                component: ctx.component_name().to_string(),
            })
        })
    }
}

impl Component for Composite {
    fn teardown(&mut self, _document: &mut Document, element: NodeId) {
        self.journal.record(JournalEntry::TornDown {
            component: self.component.clone(),
            element,
        });
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

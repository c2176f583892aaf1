//! Shared test utilities for gantry-screen.
//!
//! Provides a [`MockToolkit`] that records element creation for assertion.

use std::collections::{BTreeMap, BTreeSet};

use gantry_types::error::{GantryError, Result};

use crate::materialize::Toolkit;
use crate::node::{ElementId, WidgetNode};

/// A recorded toolkit call, keyed by the widget's display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Container(String),
    Widget(String),
}

/// A toolkit that hands out sequential ids and records every call.
///
/// Every created element gets the next tab order, except widgets listed with
/// [`MockToolkit::unfocusable`], which get -1.
pub struct MockToolkit {
    pub calls: Vec<Call>,
    pub focused: Option<ElementId>,
    next_id: i32,
    reserve_containers: bool,
    unfocusable: BTreeSet<String>,
    tab_orders: BTreeMap<ElementId, i32>,
}

impl MockToolkit {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            focused: None,
            next_id: 100,
            reserve_containers: false,
            unfocusable: BTreeSet::new(),
            tab_orders: BTreeMap::new(),
        }
    }

    /// Give containers an element too.
    pub fn reserving_containers(mut self) -> Self {
        self.reserve_containers = true;
        self
    }

    /// Create the named widgets with a tab order of -1.
    pub fn unfocusable(mut self, names: &[&str]) -> Self {
        self.unfocusable.extend(names.iter().map(|n| n.to_string()));
        self
    }

    /// Forget an element, as if the toolkit destroyed it.
    pub fn destroy(&mut self, element: ElementId) {
        self.tab_orders.remove(&element);
    }

    fn allocate(&mut self, node: &WidgetNode) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        let order = if self.unfocusable.contains(&node.display_name()) {
            -1
        } else {
            self.tab_orders.len() as i32
        };
        self.tab_orders.insert(id, order);
        id
    }
}

impl Default for MockToolkit {
    fn default() -> Self {
        Self::new()
    }
}

impl Toolkit for MockToolkit {
    fn create_container(&mut self, node: &WidgetNode) -> Result<Option<ElementId>> {
        self.calls.push(Call::Container(node.display_name()));
        Ok(self.reserve_containers.then(|| self.allocate(node)))
    }

    fn create_widget(&mut self, node: &WidgetNode) -> Result<ElementId> {
        self.calls.push(Call::Widget(node.display_name()));
        Ok(self.allocate(node))
    }

    fn tab_order(&self, element: ElementId) -> Option<i32> {
        self.tab_orders.get(&element).copied()
    }

    fn set_focus(&mut self, element: ElementId) -> Result<()> {
        self.focused = Some(element);
        Ok(())
    }
}

/// A toolkit whose every creation fails.
pub struct FailingToolkit;

impl Toolkit for FailingToolkit {
    fn create_container(&mut self, _node: &WidgetNode) -> Result<Option<ElementId>> {
        Err(GantryError::Toolkit("no device".into()))
    }

    fn create_widget(&mut self, _node: &WidgetNode) -> Result<ElementId> {
        Err(GantryError::Toolkit("no device".into()))
    }

    fn tab_order(&self, _element: ElementId) -> Option<i32> {
        None
    }

    fn set_focus(&mut self, _element: ElementId) -> Result<()> {
        Err(GantryError::Toolkit("no device".into()))
    }
}

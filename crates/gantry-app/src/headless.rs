//! A toolkit that draws nothing.
//!
//! Every leaf gets the next element id and the next tab order, so focus
//! follows declaration order. Containers get no element.

use std::collections::BTreeMap;

use gantry_screen::{ElementId, Toolkit, WidgetNode};
use gantry_types::error::Result;

pub struct HeadlessToolkit {
    next_id: i32,
    tab_orders: BTreeMap<ElementId, i32>,
    focused: Option<ElementId>,
}

impl HeadlessToolkit {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            tab_orders: BTreeMap::new(),
            focused: None,
        }
    }

    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }
}

impl Default for HeadlessToolkit {
    fn default() -> Self {
        Self::new()
    }
}

impl Toolkit for HeadlessToolkit {
    fn create_container(&mut self, _node: &WidgetNode) -> Result<Option<ElementId>> {
        Ok(None)
    }

    fn create_widget(&mut self, node: &WidgetNode) -> Result<ElementId> {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        let order = self.tab_orders.len() as i32;
        self.tab_orders.insert(id, order);
        log::debug!("Created {} as {:?} at {:?}", node.display_name(), id, node.rect);
        Ok(id)
    }

    fn tab_order(&self, element: ElementId) -> Option<i32> {
        self.tab_orders.get(&element).copied()
    }

    fn set_focus(&mut self, element: ElementId) -> Result<()> {
        self.focused = Some(element);
        Ok(())
    }
}

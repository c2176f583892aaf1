//! Tree-wide lookups.
//!
//! All searches are depth-first pre-order in declared order and return the
//! first match. A miss is `None`.

use crate::materialize::Toolkit;
use crate::node::{ElementId, WidgetNode};

/// Find a widget by its `id` property. Only containers are searched into.
pub fn find_by_identifier<'a>(widgets: &'a [WidgetNode], name: &str) -> Option<&'a WidgetNode> {
    for widget in widgets {
        if widget.identifier() == Some(name) {
            return Some(widget);
        }
        if widget.is_container() {
            if let Some(found) = find_by_identifier(&widget.children, name) {
                return Some(found);
            }
        }
    }
    None
}

pub fn find_by_identifier_mut<'a>(
    widgets: &'a mut [WidgetNode],
    name: &str,
) -> Option<&'a mut WidgetNode> {
    for widget in widgets.iter_mut() {
        if widget.identifier() == Some(name) {
            return Some(widget);
        }
        if widget.is_container() {
            if let Some(found) = find_by_identifier_mut(&mut widget.children, name) {
                return Some(found);
            }
        }
    }
    None
}

/// Find the widget materialized as `element`. Searches into every node that
/// has children.
pub fn find_by_handle(widgets: &[WidgetNode], element: ElementId) -> Option<&WidgetNode> {
    for widget in widgets {
        if widget.handle == Some(element) {
            return Some(widget);
        }
        if let Some(found) = find_by_handle(&widget.children, element) {
            return Some(found);
        }
    }
    None
}

pub fn find_by_handle_mut(
    widgets: &mut [WidgetNode],
    element: ElementId,
) -> Option<&mut WidgetNode> {
    for widget in widgets.iter_mut() {
        if widget.handle == Some(element) {
            return Some(widget);
        }
        if let Some(found) = find_by_handle_mut(&mut widget.children, element) {
            return Some(found);
        }
    }
    None
}

/// First widget that can take focus, in tab direction.
///
/// Widgets with children are searched first, except ribbons and spinners,
/// which take focus as a whole. A widget is focusable when its element is
/// alive and has a non-negative tab order.
pub fn find_first_focusable<'a, T: Toolkit + ?Sized>(
    widgets: &'a [WidgetNode],
    toolkit: &T,
) -> Option<&'a WidgetNode> {
    widgets
        .iter()
        .find_map(|widget| focus_candidate(widget, toolkit, find_first_focusable))
}

/// Last widget that can take focus, in tab direction.
pub fn find_last_focusable<'a, T: Toolkit + ?Sized>(
    widgets: &'a [WidgetNode],
    toolkit: &T,
) -> Option<&'a WidgetNode> {
    widgets
        .iter()
        .rev()
        .find_map(|widget| focus_candidate(widget, toolkit, find_last_focusable))
}

fn focus_candidate<'a, T: Toolkit + ?Sized>(
    widget: &'a WidgetNode,
    toolkit: &T,
    search: fn(&'a [WidgetNode], &T) -> Option<&'a WidgetNode>,
) -> Option<&'a WidgetNode> {
    if !widget.children.is_empty() && !widget.kind.is_focus_atomic() {
        if let Some(found) = search(&widget.children, toolkit) {
            return Some(found);
        }
    }
    is_focusable(widget, toolkit).then_some(widget)
}

fn is_focusable<T: Toolkit + ?Sized>(widget: &WidgetNode, toolkit: &T) -> bool {
    widget
        .handle
        .and_then(|element| toolkit.tab_order(element))
        .is_some_and(|order| order >= 0)
}

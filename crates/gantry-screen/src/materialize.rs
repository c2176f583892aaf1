//! Creating toolkit elements for a laid-out tree.
//!
//! The engine never talks to a rendering toolkit directly. Everything goes
//! through the [`Toolkit`] trait, which also owns every element it creates.
//! Nodes only keep the returned [`ElementId`].

use gantry_types::error::Result;

use crate::diagnostic::Diagnostic;
use crate::node::{ElementId, WidgetNode};

/// Rendering toolkit the screen materializes into.
pub trait Toolkit {
    /// Called for a container before its children are created. Containers
    /// are not drawn; a toolkit may still reserve an element for them.
    fn create_container(&mut self, node: &WidgetNode) -> Result<Option<ElementId>>;

    /// Create the element for a leaf widget from its final geometry.
    fn create_widget(&mut self, node: &WidgetNode) -> Result<ElementId>;

    /// Tab order of a live element. `None` if the element is gone.
    fn tab_order(&self, element: ElementId) -> Option<i32>;

    /// Give input focus to an element.
    fn set_focus(&mut self, element: ElementId) -> Result<()>;
}

/// Create toolkit elements for every widget, pre-order in declared order.
///
/// Leaves are validated first. Geometry problems are returned as
/// diagnostics and never stop creation; toolkit errors are propagated.
pub fn materialize<T: Toolkit + ?Sized>(
    widgets: &mut [WidgetNode],
    toolkit: &mut T,
) -> Result<Vec<Diagnostic>> {
    let mut diagnostics = Vec::new();
    materialize_into(widgets, toolkit, &mut diagnostics)?;
    Ok(diagnostics)
}

fn materialize_into<T: Toolkit + ?Sized>(
    widgets: &mut [WidgetNode],
    toolkit: &mut T,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<()> {
    for widget in widgets.iter_mut() {
        if widget.is_container() {
            widget.handle = toolkit.create_container(widget)?;
            materialize_into(&mut widget.children, toolkit, diagnostics)?;
        } else {
            validate(widget, diagnostics);
            widget.handle = Some(toolkit.create_widget(widget)?);
        }
    }
    Ok(())
}

/// Check a leaf's geometry before it is handed to the toolkit.
pub fn validate(widget: &WidgetNode, diagnostics: &mut Vec<Diagnostic>) {
    if widget.rect.is_degenerate() && !widget.kind.sizes_to_content() {
        diagnostics.push(Diagnostic::MissingDimensions {
            widget: widget.display_name(),
        });
    }
    if widget.rect.has_unset_position() {
        diagnostics.push(Diagnostic::MissingPosition {
            widget: widget.display_name(),
        });
    }
}

/// Forget every element reference in `widgets` and their descendants.
///
/// Call after the toolkit has destroyed its elements. Nothing else about the
/// nodes changes, so the tree can be materialized again.
pub fn elements_were_deleted(widgets: &mut [WidgetNode]) {
    for widget in widgets.iter_mut() {
        widget.handle = None;
        elements_were_deleted(&mut widget.children);
    }
}

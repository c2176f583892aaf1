//! Row layout solver.
//!
//! Geometry is computed top-down. Every widget first resolves its own
//! coordinates from its properties, relative to its parent. A container
//! whose `layout` is `horizontal-row` or `vertical-row` then lines its direct
//! children up along that axis, in declared order:
//!
//! 1. Absolutely sized children (no `proportion`) keep their size and
//!    consume it from the container extent.
//! 2. Proportional children split what is left by weight, truncating, and
//!    are clamped by `max_width`/`max_height`.
//! 3. A cursor starting at the container origin places each child right
//!    after the previous one. The cross axis never advances.
//!
//! Truncation may leave a few pixels unused at the end of the row; they are
//! not redistributed. Coordinates saturate at the `i32` range instead of
//! wrapping. Root widgets are positioned against the screen and are
//! never arranged in a row.

use gantry_types::geometry::{Rect, Size};

use crate::diagnostic::Diagnostic;
use crate::node::WidgetNode;
use crate::props::{Alignment, LayoutMode, Length, Proportion};

/// Axis a row runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn extent(self, rect: &Rect) -> i32 {
        match self {
            Self::Horizontal => rect.w,
            Self::Vertical => rect.h,
        }
    }
}

/// The container a set of siblings is laid out in.
struct Parent<'a> {
    name: &'a str,
    rect: Rect,
    layout: Option<&'a LayoutMode>,
}

/// Lay out a whole forest against a screen of the given size.
pub fn compute_layout(widgets: &mut [WidgetNode], screen: Size) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let parent = Parent {
        name: "<screen>",
        rect: Rect::screen(screen),
        layout: None,
    };
    layout_children(widgets, &parent, &mut diagnostics);
    diagnostics
}

/// Lay out the descendants of `node`, keeping its own geometry.
///
/// `node` must already have been positioned, either by an earlier pass or by
/// hand. Nothing happens for non-container nodes.
pub fn relayout_children(node: &mut WidgetNode) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    if node.is_container() {
        layout_container(node, &mut diagnostics);
    }
    diagnostics
}

fn layout_container(node: &mut WidgetNode, diagnostics: &mut Vec<Diagnostic>) {
    let name = node.display_name();
    let parent = Parent {
        name: &name,
        rect: node.rect,
        layout: node.properties.layout(),
    };
    layout_children(&mut node.children, &parent, diagnostics);
}

fn layout_children(
    widgets: &mut [WidgetNode],
    parent: &Parent<'_>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for widget in widgets.iter_mut() {
        widget.read_coords(parent.rect, diagnostics);
    }

    match parent.layout {
        None => {},
        Some(LayoutMode::HorizontalRow) => {
            arrange_row(widgets, parent, Axis::Horizontal, diagnostics)
        },
        Some(LayoutMode::VerticalRow) => arrange_row(widgets, parent, Axis::Vertical, diagnostics),
        Some(LayoutMode::Unknown(layout)) => diagnostics.push(Diagnostic::UnknownLayout {
            widget: parent.name.to_string(),
            layout: layout.clone(),
        }),
    }

    for widget in widgets.iter_mut().filter(|w| w.is_container()) {
        layout_container(widget, diagnostics);
    }
}

fn arrange_row(
    widgets: &mut [WidgetNode],
    parent: &Parent<'_>,
    axis: Axis,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let row_extent = axis.extent(&parent.rect);

    let mut left_space = row_extent;
    let mut total_proportion: u64 = 0;
    for widget in widgets.iter() {
        match widget.properties.proportion() {
            Some(proportion) => {
                if let Proportion::Invalid(value) = proportion {
                    diagnostics.push(Diagnostic::InvalidProportion {
                        widget: widget.display_name(),
                        value: value.clone(),
                    });
                }
                total_proportion += u64::from(proportion.weight());
            },
            None => left_space = left_space.saturating_sub(axis.extent(&widget.rect)),
        }
    }

    let (mut cursor_x, mut cursor_y) = (parent.rect.x, parent.rect.y);
    for widget in widgets.iter_mut() {
        if let Some(proportion) = widget.properties.proportion() {
            let share = proportional_share(left_space, proportion.weight(), total_proportion);
            let max = match axis {
                Axis::Horizontal => widget.properties.max_width(),
                Axis::Vertical => widget.properties.max_height(),
            };
            let size = match max.and_then(|m| m.resolve(row_extent)) {
                Some(max) => share.min(max.max(0)),
                None => share,
            };
            match axis {
                Axis::Horizontal => widget.rect.w = size,
                Axis::Vertical => widget.rect.h = size,
            }
        }

        match axis {
            Axis::Horizontal => {
                widget.rect.x = cursor_x;
                if !is_explicit(widget.properties.y()) {
                    widget.rect.y = cursor_y;
                }
                cursor_x = cursor_x.saturating_add(widget.rect.w);
            },
            Axis::Vertical => {
                widget.rect.x = aligned_x(widget, parent.rect.w, cursor_x, diagnostics);
                widget.rect.y = cursor_y;
                cursor_y = cursor_y.saturating_add(widget.rect.h);
            },
        }
    }
}

/// `floor(left_space * weight / total)`, or 0 when there is nothing to
/// share.
fn proportional_share(left_space: i32, weight: u32, total: u64) -> i32 {
    if total == 0 || left_space <= 0 {
        return 0;
    }
    let share = left_space as u64 * u64::from(weight) / total;
    i32::try_from(share).unwrap_or(i32::MAX)
}

fn aligned_x(
    widget: &WidgetNode,
    parent_w: i32,
    cursor_x: i32,
    diagnostics: &mut Vec<Diagnostic>,
) -> i32 {
    match widget.properties.align() {
        None if is_explicit(widget.properties.x()) => widget.rect.x,
        None | Some(Alignment::Left) => cursor_x,
        Some(Alignment::Center) => cursor_x
            .saturating_add(parent_w / 2)
            .saturating_sub(widget.rect.w / 2),
        Some(Alignment::Right) => cursor_x
            .saturating_add(parent_w)
            .saturating_sub(widget.rect.w),
        Some(Alignment::Unknown(align)) => {
            diagnostics.push(Diagnostic::UnknownAlignment {
                widget: widget.display_name(),
                align: align.clone(),
            });
            cursor_x
        },
    }
}

/// Whether a coordinate was given and already applied by `read_coords`.
fn is_explicit(length: Option<&Length>) -> bool {
    length.is_some_and(Length::is_valid)
}

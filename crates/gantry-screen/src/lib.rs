//! gantry-screen: declarative screen layout.
//!
//! A screen is described in TOML markup as a tree of widgets with string
//! properties. This crate parses that tree, computes absolute geometry for
//! every widget with a row layout solver, creates toolkit elements for it
//! through the [`Toolkit`] trait, and answers lookups by id, by element and
//! by focus order.

pub mod config;
pub mod diagnostic;
pub mod layout;
pub mod markup;
pub mod materialize;
pub mod node;
pub mod props;
pub mod query;
pub mod screen;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::ScreenConfig;
pub use diagnostic::Diagnostic;
pub use materialize::Toolkit;
pub use node::{ElementId, WidgetKind, WidgetNode};
pub use props::Properties;
pub use screen::Screen;

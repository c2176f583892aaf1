//! Screen markup: TOML describing a widget tree.
//!
//! ```toml
//! [[widget]]
//! type = "div"
//! id = "main"
//! width = "100%"
//! height = "100%"
//! layout = "vertical-row"
//!
//!   [[widget.children]]
//!   type = "label"
//!   id = "title"
//!   width = 200
//!   height = 40
//!   align = "center"
//! ```
//!
//! Every key besides `type` and `children` becomes a string property.

use std::collections::BTreeMap;

use serde::Deserialize;

use gantry_types::error::{GantryError, Result};

use crate::node::{WidgetKind, WidgetNode};
use crate::props::Properties;

#[derive(Debug, Deserialize)]
struct MarkupDocument {
    #[serde(default, rename = "widget")]
    widgets: Vec<RawWidget>,
}

/// A widget as written in markup, before any interpretation.
#[derive(Debug, Deserialize)]
struct RawWidget {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    children: Vec<RawWidget>,
    #[serde(flatten)]
    properties: BTreeMap<String, toml::Value>,
}

/// Parse markup into a widget forest with unset geometry.
///
/// `source_name` prefixes error messages.
pub fn parse_markup(source: &str, source_name: &str) -> Result<Vec<WidgetNode>> {
    let document: MarkupDocument = toml::from_str(source)
        .map_err(|e| GantryError::Markup(format!("{source_name}: {e}")))?;
    document
        .widgets
        .into_iter()
        .map(|raw| build_node(raw, source_name))
        .collect()
}

fn build_node(raw: RawWidget, source_name: &str) -> Result<WidgetNode> {
    let kind = WidgetKind::from_name(&raw.kind).ok_or_else(|| {
        GantryError::Markup(format!("{source_name}: unknown widget type `{}`", raw.kind))
    })?;

    let mut properties = Properties::new();
    for (key, value) in raw.properties {
        let text = scalar_text(value).ok_or_else(|| {
            GantryError::Markup(format!(
                "{source_name}: property `{key}` of a `{}` must be a scalar",
                raw.kind
            ))
        })?;
        properties.set(key, text);
    }

    let mut node = WidgetNode::with_properties(kind, properties);
    node.children = raw
        .children
        .into_iter()
        .map(|child| build_node(child, source_name))
        .collect::<Result<_>>()?;
    Ok(node)
}

fn scalar_text(value: toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s),
        toml::Value::Integer(i) => Some(i.to_string()),
        toml::Value::Float(f) => Some(f.to_string()),
        toml::Value::Boolean(b) => Some(b.to_string()),
        toml::Value::Datetime(_) | toml::Value::Array(_) | toml::Value::Table(_) => None,
    }
}

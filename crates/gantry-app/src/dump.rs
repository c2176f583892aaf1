//! JSON view of a laid-out screen.

use serde::Serialize;

use gantry_screen::{ElementId, Screen, WidgetKind, WidgetNode};
use gantry_types::geometry::{Rect, Size};

#[derive(Debug, Serialize)]
pub struct ScreenDump<'a> {
    pub screen: &'a str,
    pub size: Size,
    pub widgets: Vec<WidgetDump<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct WidgetDump<'a> {
    pub kind: WidgetKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
    pub rect: Rect,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<ElementId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<WidgetDump<'a>>,
}

impl<'a> ScreenDump<'a> {
    pub fn from_screen(screen: &'a Screen) -> Self {
        Self {
            screen: screen.filename(),
            size: screen.config().screen_size(),
            widgets: screen.widgets().iter().map(WidgetDump::from_node).collect(),
            diagnostics: screen.diagnostics().iter().map(ToString::to_string).collect(),
        }
    }
}

impl<'a> WidgetDump<'a> {
    pub fn from_node(node: &'a WidgetNode) -> Self {
        Self {
            kind: node.kind,
            id: node.identifier(),
            rect: node.rect,
            handle: node.handle,
            children: node.children.iter().map(Self::from_node).collect(),
        }
    }
}

//! Widget nodes: the tree the layout engine works on.

use gantry_types::geometry::Rect;
use serde::Serialize;

use crate::diagnostic::Diagnostic;
use crate::props::{Length, Properties, keys};

/// Identifier of a toolkit element.
///
/// This is the value the toolkit reports as the element's id. The node only
/// refers to the element; it never owns or destroys it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ElementId(pub i32);

/// Widget type, as named in markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    /// Invisible container arranging its children.
    Div,
    Ribbon,
    RibbonGrid,
    Spinner,
    Button,
    IconButton,
    Checkbox,
    Label,
    Spacer,
    ModelView,
    List,
    TextBox,
}

impl WidgetKind {
    /// Look up a kind by its markup name.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "div" => Self::Div,
            "ribbon" => Self::Ribbon,
            "ribbon_grid" => Self::RibbonGrid,
            "spinner" => Self::Spinner,
            "button" => Self::Button,
            "icon_button" => Self::IconButton,
            "checkbox" => Self::Checkbox,
            "label" => Self::Label,
            "spacer" => Self::Spacer,
            "model_view" => Self::ModelView,
            "list" => Self::List,
            "textbox" => Self::TextBox,
            _ => return None,
        })
    }

    /// Markup name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Ribbon => "ribbon",
            Self::RibbonGrid => "ribbon_grid",
            Self::Spinner => "spinner",
            Self::Button => "button",
            Self::IconButton => "icon_button",
            Self::Checkbox => "checkbox",
            Self::Label => "label",
            Self::Spacer => "spacer",
            Self::ModelView => "model_view",
            Self::List => "list",
            Self::TextBox => "textbox",
        }
    }

    /// Containers are laid out recursively and materialized as groups.
    pub fn is_container(self) -> bool {
        matches!(self, Self::Div)
    }

    /// Kinds sized by their content once created, so a zero size before
    /// creation is expected.
    pub fn sizes_to_content(self) -> bool {
        matches!(self, Self::Ribbon | Self::IconButton)
    }

    /// Kinds that take focus as a whole even though they own children.
    pub fn is_focus_atomic(self) -> bool {
        matches!(self, Self::Ribbon | Self::Spinner)
    }
}

/// One widget in a screen's tree.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetNode {
    pub kind: WidgetKind,
    pub properties: Properties,
    /// Absolute geometry. [`Rect::UNSET`] until a layout pass reaches it.
    pub rect: Rect,
    pub children: Vec<WidgetNode>,
    /// Toolkit element created for this node, if materialized.
    pub handle: Option<ElementId>,
}

impl WidgetNode {
    pub fn new(kind: WidgetKind) -> Self {
        Self::with_properties(kind, Properties::new())
    }

    pub fn with_properties(kind: WidgetKind, properties: Properties) -> Self {
        Self {
            kind,
            properties,
            rect: Rect::UNSET,
            children: Vec::new(),
            handle: None,
        }
    }

    /// Append a child (builder form).
    pub fn with_child(mut self, child: WidgetNode) -> Self {
        self.children.push(child);
        self
    }

    /// Raw property value for `key`.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key)
    }

    /// The `id` property.
    pub fn identifier(&self) -> Option<&str> {
        self.properties.id()
    }

    /// Name used when reporting on this widget.
    pub fn display_name(&self) -> String {
        match self.identifier() {
            Some(id) => id.to_string(),
            None => format!("<{}>", self.kind.name()),
        }
    }

    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    /// Resolve geometry from this node's own properties, relative to
    /// `parent`.
    ///
    /// Position defaults to the parent origin, size to zero. Percentages
    /// refer to the parent extent along the same axis.
    pub fn read_coords(&mut self, parent: Rect, diagnostics: &mut Vec<Diagnostic>) {
        let props = &self.properties;
        let name = || self.display_name();

        let x = resolve(props.x(), keys::X, parent.w, &name, diagnostics);
        let y = resolve(props.y(), keys::Y, parent.h, &name, diagnostics);
        let w = resolve(props.width(), keys::WIDTH, parent.w, &name, diagnostics);
        let h = resolve(props.height(), keys::HEIGHT, parent.h, &name, diagnostics);

        self.rect = Rect::new(
            parent.x.saturating_add(x.unwrap_or(0)),
            parent.y.saturating_add(y.unwrap_or(0)),
            w.unwrap_or(0),
            h.unwrap_or(0),
        );
    }
}

fn resolve(
    length: Option<&Length>,
    key: &'static str,
    parent_extent: i32,
    name: &dyn Fn() -> String,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<i32> {
    let length = length?;
    if let Length::Invalid(value) = length {
        diagnostics.push(Diagnostic::InvalidLength {
            widget: name(),
            key,
            value: value.clone(),
        });
    }
    length.resolve(parent_extent)
}

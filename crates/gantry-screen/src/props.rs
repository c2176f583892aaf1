//! Widget properties: the raw string bag and its typed view.
//!
//! Markup hands every widget a flat map of string properties. The keys that
//! drive layout are parsed once, when they are set, into typed fields. Values
//! that fail to parse are kept as `Unknown`/`Invalid` variants so the layout
//! pass can report them against the widget they came from.

use std::collections::BTreeMap;

/// Property keys understood by the layout engine.
pub mod keys {
    pub const ID: &str = "id";
    pub const LAYOUT: &str = "layout";
    pub const PROPORTION: &str = "proportion";
    pub const ALIGN: &str = "align";
    pub const X: &str = "x";
    pub const Y: &str = "y";
    pub const WIDTH: &str = "width";
    pub const HEIGHT: &str = "height";
    pub const MAX_WIDTH: &str = "max_width";
    pub const MAX_HEIGHT: &str = "max_height";
}

/// How a container arranges its direct children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutMode {
    /// Children placed left to right.
    HorizontalRow,
    /// Children placed top to bottom.
    VerticalRow,
    /// Unrecognized layout name, arranged as if no layout was given.
    Unknown(String),
}

impl LayoutMode {
    pub fn parse(value: &str) -> Self {
        match value {
            "horizontal-row" => Self::HorizontalRow,
            "vertical-row" => Self::VerticalRow,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Horizontal placement of a child inside a vertical row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Unknown(String),
}

impl Alignment {
    pub fn parse(value: &str) -> Self {
        match value {
            "left" => Self::Left,
            "center" => Self::Center,
            "right" => Self::Right,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Share of the space left in a row after absolutely sized siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Proportion {
    Weight(u32),
    /// Not a non-negative integer. Counts as a weight of 1.
    Invalid(String),
}

impl Proportion {
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<u32>() {
            Ok(weight) => Self::Weight(weight),
            Err(_) => Self::Invalid(value.to_string()),
        }
    }

    /// Weight used by the solver.
    pub fn weight(&self) -> u32 {
        match self {
            Self::Weight(weight) => *weight,
            Self::Invalid(_) => 1,
        }
    }
}

/// A coordinate or extent, absolute or relative to the parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Length {
    Pixels(i32),
    /// Percentage of the parent extent along the same axis.
    Percent(f32),
    Invalid(String),
}

impl Length {
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        let parsed = match trimmed.strip_suffix('%') {
            Some(pct) => pct.trim().parse::<f32>().ok().map(Self::Percent),
            None => trimmed.parse::<i32>().ok().map(Self::Pixels),
        };
        parsed.unwrap_or_else(|| Self::Invalid(value.to_string()))
    }

    /// Resolve against the parent extent. `None` for invalid values.
    pub fn resolve(&self, parent_extent: i32) -> Option<i32> {
        match self {
            Self::Pixels(px) => Some(*px),
            Self::Percent(pct) => Some((parent_extent as f32 * pct / 100.0) as i32),
            Self::Invalid(_) => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid(_))
    }
}

/// The property bag of one widget.
///
/// Every value is kept verbatim for [`Properties::get`]; the recognized
/// keys are additionally parsed into typed fields. An empty value counts as
/// absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    raw: BTreeMap<String, String>,
    id: Option<String>,
    layout: Option<LayoutMode>,
    proportion: Option<Proportion>,
    align: Option<Alignment>,
    x: Option<Length>,
    y: Option<Length>,
    width: Option<Length>,
    height: Option<Length>,
    max_width: Option<Length>,
    max_height: Option<Length>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Properties::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a property, replacing any previous value for `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        self.apply(&key, &value);
        self.raw.insert(key, value);
    }

    /// Raw string value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.raw.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn layout(&self) -> Option<&LayoutMode> {
        self.layout.as_ref()
    }

    pub fn proportion(&self) -> Option<&Proportion> {
        self.proportion.as_ref()
    }

    pub fn align(&self) -> Option<&Alignment> {
        self.align.as_ref()
    }

    pub fn x(&self) -> Option<&Length> {
        self.x.as_ref()
    }

    pub fn y(&self) -> Option<&Length> {
        self.y.as_ref()
    }

    pub fn width(&self) -> Option<&Length> {
        self.width.as_ref()
    }

    pub fn height(&self) -> Option<&Length> {
        self.height.as_ref()
    }

    pub fn max_width(&self) -> Option<&Length> {
        self.max_width.as_ref()
    }

    pub fn max_height(&self) -> Option<&Length> {
        self.max_height.as_ref()
    }

    fn apply(&mut self, key: &str, value: &str) {
        let present = (!value.is_empty()).then_some(value);
        match key {
            keys::ID => self.id = present.map(str::to_string),
            keys::LAYOUT => self.layout = present.map(LayoutMode::parse),
            keys::PROPORTION => self.proportion = present.map(Proportion::parse),
            keys::ALIGN => self.align = present.map(Alignment::parse),
            keys::X => self.x = present.map(Length::parse),
            keys::Y => self.y = present.map(Length::parse),
            keys::WIDTH => self.width = present.map(Length::parse),
            keys::HEIGHT => self.height = present.map(Length::parse),
            keys::MAX_WIDTH => self.max_width = present.map(Length::parse),
            keys::MAX_HEIGHT => self.max_height = present.map(Length::parse),
            _ => {},
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (key, value) in iter {
            props.set(key, value);
        }
        props
    }
}

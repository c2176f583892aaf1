//! A screen: one markup file, its widget tree and its layout.

use gantry_types::error::{GantryError, Result};

use crate::config::ScreenConfig;
use crate::diagnostic::{Diagnostic, log_diagnostics};
use crate::layout;
use crate::markup::parse_markup;
use crate::materialize::{self, Toolkit};
use crate::node::{ElementId, WidgetNode};
use crate::query;

/// A screen loaded from a markup file.
///
/// Construction parses and lays out the file eagerly. The tree stays valid
/// across any number of materialize / teardown cycles.
#[derive(Debug)]
pub struct Screen {
    filename: String,
    config: ScreenConfig,
    widgets: Vec<WidgetNode>,
    loaded: bool,
    /// Anomalies found by the last layout or materialization pass.
    diagnostics: Vec<Diagnostic>,
}

impl Screen {
    /// Load `filename` from the configured GUI directory and lay it out.
    pub fn new(filename: impl Into<String>, config: ScreenConfig) -> Result<Self> {
        let mut screen = Self::unloaded(filename, config);
        screen.load_from_file()?;
        Ok(screen)
    }

    /// A screen whose file is read on first use.
    pub fn unloaded(filename: impl Into<String>, config: ScreenConfig) -> Self {
        Self {
            filename: filename.into(),
            config,
            widgets: Vec::new(),
            loaded: false,
            diagnostics: Vec::new(),
        }
    }

    /// Build a screen from markup already in memory. `filename` is only used
    /// for messages and later reloads.
    pub fn from_markup(
        filename: impl Into<String>,
        source: &str,
        config: ScreenConfig,
    ) -> Result<Self> {
        let mut screen = Self::unloaded(filename, config);
        let widgets = parse_markup(source, &screen.filename)?;
        screen.install(widgets);
        Ok(screen)
    }

    /// (Re)read the markup file, replacing the whole tree, and lay it out.
    ///
    /// Handles of the previous tree are dropped without touching the
    /// toolkit.
    pub fn load_from_file(&mut self) -> Result<()> {
        let path = self.config.resolve(&self.filename);
        log::debug!("Loading screen {}", path.display());
        let source = std::fs::read_to_string(&path)
            .map_err(|e| GantryError::Markup(format!("{}: {e}", path.display())))?;
        let widgets = parse_markup(&source, &self.filename)?;
        self.install(widgets);
        Ok(())
    }

    fn install(&mut self, widgets: Vec<WidgetNode>) {
        self.widgets = widgets;
        self.loaded = true;
        self.calculate_layout();
        log::info!(
            "Loaded screen {} ({} root widgets)",
            self.filename,
            self.widgets.len()
        );
    }

    /// Recompute geometry of the whole tree.
    pub fn calculate_layout(&mut self) {
        let diagnostics = layout::compute_layout(&mut self.widgets, self.config.screen_size());
        self.record(diagnostics);
    }

    /// Recompute geometry below the container `name`, keeping its own
    /// geometry. Returns false if no widget has that id.
    pub fn calculate_layout_within(&mut self, name: &str) -> bool {
        let Some(widget) = query::find_by_identifier_mut(&mut self.widgets, name) else {
            return false;
        };
        let diagnostics = layout::relayout_children(widget);
        self.record(diagnostics);
        true
    }

    /// Create toolkit elements for the tree and focus the first focusable
    /// widget. Loads the file first if needed.
    pub fn add_widgets<T: Toolkit + ?Sized>(&mut self, toolkit: &mut T) -> Result<()> {
        if !self.loaded {
            self.load_from_file()?;
        }

        let diagnostics = materialize::materialize(&mut self.widgets, toolkit)?;
        self.record(diagnostics);

        let focus = query::find_first_focusable(&self.widgets, toolkit).and_then(|w| w.handle);
        if let Some(element) = focus {
            toolkit.set_focus(element)?;
        }
        Ok(())
    }

    /// The toolkit destroyed every element of this screen; forget them.
    pub fn elements_were_deleted(&mut self) {
        materialize::elements_were_deleted(&mut self.widgets);
    }

    /// Add a root widget built in code. It is not laid out until the next
    /// [`Screen::calculate_layout`].
    pub fn manual_add_widget(&mut self, widget: WidgetNode) {
        self.widgets.push(widget);
    }

    /// Remove the root widget with id `name`, returning it.
    pub fn manual_remove_widget(&mut self, name: &str) -> Option<WidgetNode> {
        let index = self
            .widgets
            .iter()
            .position(|w| w.identifier() == Some(name))?;
        Some(self.widgets.remove(index))
    }

    pub fn get_widget(&self, name: &str) -> Option<&WidgetNode> {
        query::find_by_identifier(&self.widgets, name)
    }

    pub fn get_widget_mut(&mut self, name: &str) -> Option<&mut WidgetNode> {
        query::find_by_identifier_mut(&mut self.widgets, name)
    }

    pub fn get_widget_by_handle(&self, element: ElementId) -> Option<&WidgetNode> {
        query::find_by_handle(&self.widgets, element)
    }

    pub fn get_widget_by_handle_mut(&mut self, element: ElementId) -> Option<&mut WidgetNode> {
        query::find_by_handle_mut(&mut self.widgets, element)
    }

    /// First focusable widget, e.g. to wrap focus around going forward.
    pub fn first_widget<T: Toolkit + ?Sized>(&self, toolkit: &T) -> Option<&WidgetNode> {
        query::find_first_focusable(&self.widgets, toolkit)
    }

    /// Last focusable widget, e.g. to wrap focus around going backward.
    pub fn last_widget<T: Toolkit + ?Sized>(&self, toolkit: &T) -> Option<&WidgetNode> {
        query::find_last_focusable(&self.widgets, toolkit)
    }

    pub fn widgets(&self) -> &[WidgetNode] {
        &self.widgets
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    fn record(&mut self, diagnostics: Vec<Diagnostic>) {
        log_diagnostics(&self.filename, &diagnostics);
        self.diagnostics = diagnostics;
    }
}

//! Mode and parameter state driven by UI events.
//!
//! [`RecolorState`] is plain data. Every mutator reports whether anything
//! changed and bumps [`RecolorState::version`] when it did, so callers can
//! skip redundant renders. A render snapshot is taken with
//! [`RecolorState::request`].

use serde::{Deserialize, Serialize};

use crate::asset::{AssetCategory, AssetRef};
use crate::catalog::Catalog;
use crate::color::Color;

/// The two mutually exclusive recolor modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Single base texture colorized between color1 and black.
    #[default]
    Solid,
    /// Catalog pattern colorized between color1 and color2.
    Patterned,
}

/// Input events a selection UI can route into the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateEvent {
    ModeChanged(Mode),
    Color1Changed(Color),
    Color2Changed(Color),
    PatternSelected(String),
    OverlayToggled(bool),
    SwapColors,
}

/// Current user selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecolorState {
    mode: Mode,
    pattern: String,
    color1: Color,
    color2: Color,
    overlay_enabled: bool,
    version: u64,
}

impl RecolorState {
    /// Creates the initial state from a catalog's defaults: solid mode, the
    /// first pattern selected, overlay off.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            mode: Mode::Solid,
            pattern: catalog.first_pattern().unwrap_or_default().to_string(),
            color1: catalog.default_color1,
            color2: catalog.default_color2,
            overlay_enabled: false,
            version: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// File name of the selected pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn color1(&self) -> Color {
        self.color1
    }

    /// The stored second color, ignoring the mode.
    pub fn stored_color2(&self) -> Color {
        self.color2
    }

    /// The second color a render actually uses: black in solid mode, the
    /// stored selection in patterned mode.
    pub fn color2(&self) -> Color {
        match self.mode {
            Mode::Solid => Color::BLACK,
            Mode::Patterned => self.color2,
        }
    }

    /// Whether the overlay toggle is on, regardless of mode.
    pub fn overlay_enabled(&self) -> bool {
        self.overlay_enabled
    }

    /// Whether the next render composites the overlay.
    pub fn overlay_active(&self) -> bool {
        self.mode == Mode::Solid && self.overlay_enabled
    }

    /// Returns the current version number.
    pub fn version(&self) -> u64 {
        self.version
    }

    fn bump(&mut self) -> bool {
        self.version = self.version.wrapping_add(1);
        true
    }

    /// Switches the active mode. Returns true if it changed.
    pub fn set_mode(&mut self, mode: Mode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.bump()
    }

    /// Replaces the first color. Returns true if it changed.
    pub fn set_color1(&mut self, color: Color) -> bool {
        if self.color1 == color {
            return false;
        }
        self.color1 = color;
        self.bump()
    }

    /// Replaces the stored second color. Returns true if it changed.
    ///
    /// In solid mode the stored value is kept for when patterned mode is
    /// selected again; it does not affect solid renders.
    pub fn set_color2(&mut self, color: Color) -> bool {
        if self.color2 == color {
            return false;
        }
        self.color2 = color;
        self.bump()
    }

    /// Exchanges color1 and the stored color2. Returns true if they differed.
    pub fn swap_colors(&mut self) -> bool {
        if self.color1 == self.color2 {
            return false;
        }
        std::mem::swap(&mut self.color1, &mut self.color2);
        self.bump()
    }

    /// Toggles overlay compositing. Returns true if it changed.
    pub fn set_overlay_enabled(&mut self, enabled: bool) -> bool {
        if self.overlay_enabled == enabled {
            return false;
        }
        self.overlay_enabled = enabled;
        self.bump()
    }

    /// Selects the pattern used in patterned mode. Returns true if it changed.
    pub fn set_pattern(&mut self, file: impl Into<String>) -> bool {
        let file = file.into();
        if self.pattern == file {
            return false;
        }
        self.pattern = file;
        self.bump()
    }

    /// Applies a UI event. Returns true if a render is needed.
    pub fn apply(&mut self, event: StateEvent) -> bool {
        match event {
            StateEvent::ModeChanged(mode) => self.set_mode(mode),
            StateEvent::Color1Changed(color) => self.set_color1(color),
            StateEvent::Color2Changed(color) => self.set_color2(color),
            StateEvent::PatternSelected(file) => self.set_pattern(file),
            StateEvent::OverlayToggled(enabled) => self.set_overlay_enabled(enabled),
            StateEvent::SwapColors => self.swap_colors(),
        }
    }

    /// Takes an immutable snapshot for one render cycle.
    pub fn request(&self, catalog: &Catalog) -> RenderRequest {
        let base = match self.mode {
            Mode::Solid => catalog.solid_asset(),
            Mode::Patterned => AssetRef::new(AssetCategory::Pattern, self.pattern.as_str()),
        };
        RenderRequest {
            mode: self.mode,
            base,
            color1: self.color1,
            color2: self.color2(),
            overlay_enabled: self.overlay_active(),
            overlay: catalog.overlay_asset(),
        }
    }
}

/// Everything one render cycle needs, captured at trigger time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub mode: Mode,
    /// Base bitmap to recolor.
    pub base: AssetRef,
    /// Color that white source pixels map to.
    pub color1: Color,
    /// Color that black source pixels map to.
    pub color2: Color,
    /// Whether the overlay is composited after recoloring.
    pub overlay_enabled: bool,
    /// Overlay bitmap, loaded only when `overlay_enabled` is set.
    pub overlay: AssetRef,
}

impl RenderRequest {
    /// Returns the overlay reference if this request composites it.
    pub fn overlay_asset(&self) -> Option<&AssetRef> {
        self.overlay_enabled.then_some(&self.overlay)
    }
}

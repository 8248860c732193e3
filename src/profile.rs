//! Serializable snapshot of the user's selections.
//!
//! A [`Profile`] captures the mode, pattern, colors and overlay toggle in a
//! JSON-friendly format so selections can be saved, restored, or passed
//! between a frontend and the renderer.
//!
//! # Example
//!
//! ```
//! use duotone_renderer::{Catalog, Color, Configurable, Mode, Profile, RecolorState};
//!
//! let catalog = Catalog::default();
//! let mut state = RecolorState::new(&catalog);
//!
//! let profile = Profile::new(Mode::Patterned)
//!     .with_pattern("pattern_camo.png")
//!     .with_colors(Color::new(0x0f, 0x2e, 0xec), Color::new(0xd8, 0xd0, 0xc8));
//! state.apply_profile(&profile);
//!
//! let json = state.export_profile().to_json().unwrap();
//! let restored = Profile::from_json(&json).unwrap();
//! assert_eq!(restored.mode, Mode::Patterned);
//! ```

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::state::{Mode, RecolorState};

// ============================================================================
// Configurable Trait
// ============================================================================

/// Trait for types that can be configured from a [`Profile`].
pub trait Configurable {
    /// Applies a profile's settings to this instance.
    ///
    /// Returns true if anything changed.
    fn apply_profile(&mut self, profile: &Profile) -> bool;

    /// Exports the current settings as a profile.
    fn export_profile(&self) -> Profile;
}

// ============================================================================
// Profile
// ============================================================================

/// A serializable set of selections.
///
/// # JSON Format
///
/// ```json
/// {
///   "mode": "patterned",
///   "pattern": "pattern_stripe.png",
///   "color1": "e6130b",
///   "color2": "262626",
///   "overlay": false
/// }
/// ```
///
/// Fields other than `mode` are optional; missing ones leave the current
/// selection unchanged when applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Active mode.
    pub mode: Mode,

    /// Selected pattern file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// First color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color1: Option<Color>,

    /// Stored second color (ignored by solid renders).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color2: Option<Color>,

    /// Overlay toggle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<bool>,
}

impl Profile {
    /// Creates a profile that only sets the mode.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Sets the pattern.
    pub fn with_pattern(mut self, file: impl Into<String>) -> Self {
        self.pattern = Some(file.into());
        self
    }

    /// Sets both colors.
    pub fn with_colors(mut self, color1: Color, color2: Color) -> Self {
        self.color1 = Some(color1);
        self.color2 = Some(color2);
        self
    }

    /// Sets the overlay toggle.
    pub fn with_overlay(mut self, enabled: bool) -> Self {
        self.overlay = Some(enabled);
        self
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Configurable for RecolorState {
    fn apply_profile(&mut self, profile: &Profile) -> bool {
        let mut changed = self.set_mode(profile.mode);
        if let Some(pattern) = &profile.pattern {
            changed |= self.set_pattern(pattern.as_str());
        }
        if let Some(color1) = profile.color1 {
            changed |= self.set_color1(color1);
        }
        if let Some(color2) = profile.color2 {
            changed |= self.set_color2(color2);
        }
        if let Some(overlay) = profile.overlay {
            changed |= self.set_overlay_enabled(overlay);
        }
        changed
    }

    fn export_profile(&self) -> Profile {
        Profile {
            mode: self.mode(),
            pattern: Some(self.pattern().to_string()),
            color1: Some(self.color1()),
            color2: Some(self.stored_color2()),
            overlay: Some(self.overlay_enabled()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn profile_json_format() {
        let profile = Profile::new(Mode::Patterned)
            .with_pattern("00.png")
            .with_colors(Color::new(230, 19, 11), Color::new(38, 38, 38))
            .with_overlay(false);

        let json = profile.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"mode":"patterned","pattern":"00.png","color1":"e6130b","color2":"262626","overlay":false}"#
        );
    }

    #[test]
    fn minimal_profile_deserializes() {
        let profile = Profile::from_json(r#"{"mode":"solid"}"#).unwrap();
        assert_eq!(profile, Profile::new(Mode::Solid));
    }

    #[test]
    fn invalid_color_is_rejected() {
        let result = Profile::from_json(r#"{"mode":"solid","color1":"12345"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn apply_profile_to_state() {
        let catalog = Catalog::default();
        let mut state = RecolorState::new(&catalog);

        let profile = Profile::new(Mode::Patterned)
            .with_pattern("pattern_mesh.png")
            .with_colors(Color::WHITE, Color::BLACK)
            .with_overlay(true);
        assert!(state.apply_profile(&profile));

        assert_eq!(state.mode(), Mode::Patterned);
        assert_eq!(state.pattern(), "pattern_mesh.png");
        assert_eq!(state.color1(), Color::WHITE);
        assert_eq!(state.color2(), Color::BLACK);
        assert!(state.overlay_enabled());

        // Reapplying is a no-op.
        assert!(!state.apply_profile(&profile));
    }

    #[test]
    fn partial_profile_keeps_other_selections() {
        let catalog = Catalog::default();
        let mut state = RecolorState::new(&catalog);
        state.set_color1(Color::WHITE);

        state.apply_profile(&Profile::new(Mode::Patterned));
        assert_eq!(state.color1(), Color::WHITE);
        assert_eq!(state.pattern(), "00.png");
    }

    #[test]
    fn export_keeps_stored_second_color_in_solid_mode() {
        let catalog = Catalog::default();
        let mut state = RecolorState::new(&catalog);
        state.set_color2(Color::new(1, 2, 3));

        let profile = state.export_profile();
        assert_eq!(profile.mode, Mode::Solid);
        assert_eq!(profile.color2, Some(Color::new(1, 2, 3)));

        let mut other = RecolorState::new(&catalog);
        other.apply_profile(&profile);
        assert_eq!(other.export_profile(), profile);
    }
}

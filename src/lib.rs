//! duotone-renderer: two-color recoloring of grayscale textures
//!
//! This crate remaps the brightness of a grayscale base image onto a
//! gradient between two chosen colors and optionally composites an overlay
//! image on top. White source pixels become the first color, black source
//! pixels become the second; fully transparent pixels are left alone.
//!
//! Two modes decide which image and which colors are used:
//!
//! - **Solid**: a single base texture, recolored between the first color and
//!   black, with an optional overlay.
//! - **Patterned**: one of the catalog's pattern textures, recolored between
//!   two freely chosen colors.
//!
//! # Example
//!
//! ```
//! use duotone_renderer::{
//!     Catalog, Color, MemoryLoader, Mode, RecolorEngine, RecolorState, StateEvent,
//! };
//! use image::{Rgba, RgbaImage};
//!
//! let catalog = Catalog::default();
//!
//! // Register a pattern texture: black on the left, white on the right.
//! let mut loader = MemoryLoader::new(catalog.layout.clone());
//! let pattern = RgbaImage::from_fn(2, 1, |x, _| {
//!     let v = if x == 0 { 0 } else { 255 };
//!     Rgba([v, v, v, 255])
//! });
//! loader.insert(&catalog.patterns[0].asset(), pattern);
//!
//! let mut engine = RecolorEngine::new(loader);
//! let mut state = RecolorState::new(&catalog);
//!
//! // Route UI events into the state
//! state.apply(StateEvent::ModeChanged(Mode::Patterned));
//! state.apply(StateEvent::Color1Changed(Color::new(230, 19, 11)));
//! state.apply(StateEvent::Color2Changed(Color::new(38, 38, 38)));
//!
//! engine.render(&state.request(&catalog)).unwrap();
//!
//! let output = engine.presented().unwrap();
//! assert_eq!(output.get_pixel(0, 0).0, [38, 38, 38, 255]);
//! assert_eq!(output.get_pixel(1, 0).0, [230, 19, 11, 255]);
//!
//! // Encode what is shown for download
//! let export = engine.export(1_700_000_000_000).unwrap();
//! assert_eq!(export.file_name, "export_1700000000000.png");
//! ```

mod asset;
mod catalog;
mod color;
mod engine;
mod error;
mod export;
mod layer;
mod profile;
mod state;
mod surface;

#[cfg(feature = "canvas")]
mod canvas;

pub use asset::{
    AssetCategory, AssetLayout, AssetLoader, AssetRef, DirectoryLoader, MemoryLoader,
};
#[cfg(feature = "canvas")]
pub use canvas::{CanvasRenderer, PngDownload};
pub use catalog::{Catalog, PatternEntry};
pub use color::{Color, ColorEntry};
pub use engine::RecolorEngine;
pub use error::{ExportError, LoadError, ParseColorError, RenderError};
pub use export::{Export, encode_png, export_file_name, now_millis};
pub use layer::composite::{alpha_blend, composite_over, stretch_to};
pub use layer::recolor::{apply_recolor, brightness, interpolate_channel};
pub use layer::{ImageOverlayConfig, LayerEffect, LayerPipeline, RecolorConfig, RenderContext};
pub use profile::{Configurable, Profile};
pub use state::{Mode, RecolorState, RenderRequest, StateEvent};
pub use surface::{RenderTicket, Surface};

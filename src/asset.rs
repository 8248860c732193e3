//! Asset references and loaders.
//!
//! Base textures, pattern textures and the overlay are referenced by a
//! category plus a file name. An [`AssetLayout`] maps each category to a
//! directory, and an [`AssetLoader`] turns the resolved path into a bitmap.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// The three independent resource categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetCategory {
    /// The single base texture used in solid mode.
    SolidBase,
    /// Catalog pattern textures used in patterned mode.
    Pattern,
    /// The overlay composited on top in solid mode.
    Overlay,
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SolidBase => "solid base",
            Self::Pattern => "pattern",
            Self::Overlay => "overlay",
        };
        f.write_str(name)
    }
}

/// A logical reference to an image asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetRef {
    pub category: AssetCategory,
    pub file: String,
}

impl AssetRef {
    pub fn new(category: AssetCategory, file: impl Into<String>) -> Self {
        Self {
            category,
            file: file.into(),
        }
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} asset '{}'", self.category, self.file)
    }
}

/// Directory used for each asset category, relative to an asset root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetLayout {
    pub solid_dir: String,
    pub pattern_dir: String,
    pub overlay_dir: String,
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self {
            solid_dir: "pic/monochromatic".into(),
            pattern_dir: "pic/pattern".into(),
            overlay_dir: "pic/Aura".into(),
        }
    }
}

impl AssetLayout {
    /// Returns the directory for a category.
    pub fn dir(&self, category: AssetCategory) -> &str {
        match category {
            AssetCategory::SolidBase => &self.solid_dir,
            AssetCategory::Pattern => &self.pattern_dir,
            AssetCategory::Overlay => &self.overlay_dir,
        }
    }

    /// Resolves an asset to its path relative to the asset root.
    pub fn resolve(&self, asset: &AssetRef) -> PathBuf {
        Path::new(self.dir(asset.category)).join(&asset.file)
    }

    /// Resolves an asset to a `/`-separated key, independent of platform.
    pub fn key(&self, asset: &AssetRef) -> String {
        let dir = self.dir(asset.category).trim_end_matches('/');
        if dir.is_empty() {
            asset.file.clone()
        } else {
            format!("{dir}/{}", asset.file)
        }
    }
}

/// Source of decoded bitmaps for asset references.
pub trait AssetLoader {
    /// Loads and decodes an asset into an RGBA bitmap.
    fn load(&self, asset: &AssetRef) -> Result<RgbaImage, LoadError>;
}

impl<L: AssetLoader + ?Sized> AssetLoader for &L {
    fn load(&self, asset: &AssetRef) -> Result<RgbaImage, LoadError> {
        (**self).load(asset)
    }
}

/// Loads assets from files below a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    root: PathBuf,
    layout: AssetLayout,
}

impl DirectoryLoader {
    pub fn new(root: impl Into<PathBuf>, layout: AssetLayout) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    /// Returns the absolute-or-root-relative path for an asset.
    pub fn path_of(&self, asset: &AssetRef) -> PathBuf {
        self.root.join(self.layout.resolve(asset))
    }
}

impl AssetLoader for DirectoryLoader {
    fn load(&self, asset: &AssetRef) -> Result<RgbaImage, LoadError> {
        let path = self.path_of(asset);
        log::debug!("loading {asset} from {}", path.display());
        if !path.is_file() {
            return Err(LoadError::NotFound);
        }
        Ok(image::open(&path)?.to_rgba8())
    }
}

/// Holds already-decoded bitmaps keyed by their layout-relative path.
///
/// Used where assets arrive as bytes rather than files, such as the
/// browser binding.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    layout: AssetLayout,
    images: HashMap<String, RgbaImage>,
}

impl MemoryLoader {
    pub fn new(layout: AssetLayout) -> Self {
        Self {
            layout,
            images: HashMap::new(),
        }
    }

    /// Registers a decoded bitmap for an asset, replacing any previous one.
    pub fn insert(&mut self, asset: &AssetRef, image: RgbaImage) {
        self.images.insert(self.layout.key(asset), image);
    }

    /// Decodes encoded image bytes (PNG or any format `image` detects) and
    /// registers the result.
    pub fn insert_encoded(&mut self, asset: &AssetRef, bytes: &[u8]) -> Result<(), LoadError> {
        let image = image::load_from_memory(bytes)?.to_rgba8();
        self.insert(asset, image);
        Ok(())
    }

    pub fn contains(&self, asset: &AssetRef) -> bool {
        self.images.contains_key(&self.layout.key(asset))
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl AssetLoader for MemoryLoader {
    fn load(&self, asset: &AssetRef) -> Result<RgbaImage, LoadError> {
        self.images
            .get(&self.layout.key(asset))
            .cloned()
            .ok_or(LoadError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn layout_resolves_per_category() {
        let layout = AssetLayout::default();
        let pattern = AssetRef::new(AssetCategory::Pattern, "pattern_camo.png");
        assert_eq!(layout.key(&pattern), "pic/pattern/pattern_camo.png");
        assert_eq!(
            layout.resolve(&pattern),
            Path::new("pic").join("pattern").join("pattern_camo.png")
        );

        let overlay = AssetRef::new(AssetCategory::Overlay, "aura.png");
        assert_eq!(layout.key(&overlay), "pic/Aura/aura.png");
    }

    #[test]
    fn layout_key_with_empty_dir() {
        let layout = AssetLayout {
            solid_dir: String::new(),
            pattern_dir: "patterns/".into(),
            overlay_dir: "overlays".into(),
        };
        let base = AssetRef::new(AssetCategory::SolidBase, "base.png");
        assert_eq!(layout.key(&base), "base.png");
        let pattern = AssetRef::new(AssetCategory::Pattern, "00.png");
        assert_eq!(layout.key(&pattern), "patterns/00.png");
    }

    #[test]
    fn asset_ref_display() {
        let asset = AssetRef::new(AssetCategory::SolidBase, "base.png");
        assert_eq!(asset.to_string(), "solid base asset 'base.png'");
    }

    #[test]
    fn memory_loader_round_trip() {
        let mut loader = MemoryLoader::new(AssetLayout::default());
        assert!(loader.is_empty());

        let asset = AssetRef::new(AssetCategory::Pattern, "00.png");
        loader.insert(&asset, RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 4])));
        assert!(loader.contains(&asset));
        assert_eq!(loader.len(), 1);

        let loaded = loader.load(&asset).unwrap();
        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.get_pixel(2, 1).0, [1, 2, 3, 4]);
    }

    #[test]
    fn memory_loader_separates_categories() {
        let mut loader = MemoryLoader::new(AssetLayout::default());
        let pattern = AssetRef::new(AssetCategory::Pattern, "x.png");
        loader.insert(&pattern, RgbaImage::new(1, 1));

        let overlay = AssetRef::new(AssetCategory::Overlay, "x.png");
        assert!(matches!(loader.load(&overlay), Err(LoadError::NotFound)));
    }

    #[test]
    fn memory_loader_rejects_garbage_bytes() {
        let mut loader = MemoryLoader::new(AssetLayout::default());
        let asset = AssetRef::new(AssetCategory::Overlay, "aura.png");
        let result = loader.insert_encoded(&asset, b"not an image");
        assert!(matches!(result, Err(LoadError::Image(_))));
        assert!(!loader.contains(&asset));
    }

    #[test]
    fn directory_loader_reads_png() {
        let dir = tempfile::tempdir().unwrap();
        let layout = AssetLayout::default();
        let asset = AssetRef::new(AssetCategory::SolidBase, "base.png");

        let path = dir.path().join(layout.resolve(&asset));
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        RgbaImage::from_pixel(4, 5, Rgba([200, 200, 200, 255]))
            .save(&path)
            .unwrap();

        let loader = DirectoryLoader::new(dir.path(), layout);
        let loaded = loader.load(&asset).unwrap();
        assert_eq!(loaded.dimensions(), (4, 5));
        assert_eq!(loaded.get_pixel(0, 0).0, [200, 200, 200, 255]);
    }

    #[test]
    fn directory_loader_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loader = DirectoryLoader::new(dir.path(), AssetLayout::default());
        let asset = AssetRef::new(AssetCategory::Pattern, "missing.png");
        assert!(matches!(loader.load(&asset), Err(LoadError::NotFound)));
    }
}

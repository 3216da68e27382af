//! Optional image and sound assets
//!
//! The game never requires a file on disk. Entry points pick a resolver
//! (fixed folder, working directory, or none) and the catalog records what
//! was found. Anything missing is drawn with flat-color primitives or stays
//! silent.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::audio::SoundEffect;

/// Images the renderer can use instead of primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageAsset {
    Background,
    Bird,
    Pipe,
    Base,
    Intro,
    GameOver,
}

impl ImageAsset {
    pub const ALL: [ImageAsset; 6] = [
        ImageAsset::Background,
        ImageAsset::Bird,
        ImageAsset::Pipe,
        ImageAsset::Base,
        ImageAsset::Intro,
        ImageAsset::GameOver,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            ImageAsset::Background => "background.png",
            ImageAsset::Bird => "bird.png",
            ImageAsset::Pipe => "pipe.png",
            ImageAsset::Base => "base.png",
            ImageAsset::Intro => "intro.png",
            ImageAsset::GameOver => "gameover.png",
        }
    }
}

/// Strategy for turning an asset file name into a readable path
pub trait AssetResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf>;

    /// Human-readable location for logs
    fn describe(&self) -> String;
}

/// Look in one fixed folder (desktop install)
#[derive(Debug, Clone)]
pub struct DirResolver {
    root: PathBuf,
}

impl DirResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetResolver for DirResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let path = self.root.join(name);
        path.is_file().then_some(path)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Look next to the working directory (portable bundle)
#[derive(Debug, Clone, Copy, Default)]
pub struct RelativeResolver;

impl AssetResolver for RelativeResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let path = Path::new(name);
        path.is_file().then(|| path.to_path_buf())
    }

    fn describe(&self) -> String {
        "working directory".to_string()
    }
}

/// Never finds anything; forces fallback rendering and silence
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetResolver for NoAssets {
    fn resolve(&self, _name: &str) -> Option<PathBuf> {
        None
    }

    fn describe(&self) -> String {
        "none".to_string()
    }
}

/// What was found at startup
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    images: HashMap<ImageAsset, PathBuf>,
    sounds: HashMap<SoundEffect, PathBuf>,
}

impl AssetCatalog {
    /// Resolve every known asset, logging hits and misses
    pub fn load(resolver: &dyn AssetResolver) -> Self {
        log::info!("Loading assets from {}", resolver.describe());
        let mut catalog = Self::default();

        for image in ImageAsset::ALL {
            if let Some(path) = lookup(resolver, image.file_name()) {
                catalog.images.insert(image, path);
            }
        }
        for sound in SoundEffect::ALL {
            if let Some(path) = lookup(resolver, sound.file_name()) {
                catalog.sounds.insert(sound, path);
            }
        }

        let missing = catalog.missing_count();
        if missing > 0 {
            log::warn!("{} assets missing, using fallback rendering/silence", missing);
        }
        catalog
    }

    pub fn has_image(&self, image: ImageAsset) -> bool {
        self.images.contains_key(&image)
    }

    pub fn sound_path(&self, sound: SoundEffect) -> Option<&Path> {
        self.sounds.get(&sound).map(PathBuf::as_path)
    }

    /// Number of known assets that could not be resolved
    pub fn missing_count(&self) -> usize {
        ImageAsset::ALL.len() + SoundEffect::ALL.len() - self.images.len() - self.sounds.len()
    }
}

fn lookup(resolver: &dyn AssetResolver, name: &str) -> Option<PathBuf> {
    let found = resolver.resolve(name);
    match &found {
        Some(path) => log::info!("Found {}", path.display()),
        None => log::warn!("Could not find '{}' in {}", name, resolver.describe()),
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_no_assets_means_everything_missing() {
        let catalog = AssetCatalog::load(&NoAssets);
        assert_eq!(catalog.missing_count(), 9);
        assert!(!catalog.has_image(ImageAsset::Bird));
        assert!(catalog.sound_path(SoundEffect::Jump).is_none());
    }

    #[test]
    fn test_dir_resolver_finds_present_files() {
        let dir = std::env::temp_dir().join(format!("flippy-assets-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("bird.png"), b"png").unwrap();
        fs::write(dir.join("hit.wav"), b"wav").unwrap();

        let catalog = AssetCatalog::load(&DirResolver::new(&dir));
        assert!(catalog.has_image(ImageAsset::Bird));
        assert!(!catalog.has_image(ImageAsset::Pipe));
        assert_eq!(
            catalog.sound_path(SoundEffect::Hit),
            Some(dir.join("hit.wav").as_path())
        );
        assert_eq!(catalog.missing_count(), 7);

        fs::remove_dir_all(&dir).unwrap();
    }
}

//! Bundled asset lookup.
//!
//! Assets live in an `assets/` directory. The first existing candidate wins:
//! next to the executable, the working directory, then the workspace root
//! the binary was built from.

use anyhow::Context;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct AssetDir {
    roots: Vec<PathBuf>,
}

impl AssetDir {
    pub fn discover() -> Self {
        let mut roots = Vec::new();
        if let Some(dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            roots.push(dir.join("assets"));
        }
        if let Ok(cwd) = std::env::current_dir() {
            roots.push(cwd.join("assets"));
        }
        roots.push(Path::new(env!("CARGO_MANIFEST_DIR")).join("../../assets"));
        Self { roots }
    }

    pub fn with_roots(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Full path of `name` in the first root that has it.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.roots
            .iter()
            .map(|root| root.join(name))
            .find(|candidate| candidate.is_file())
    }
}

/// Decoded RGBA8 image ready for upload.
pub struct LogoImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

pub fn load_logo(assets: &AssetDir, name: &str) -> anyhow::Result<Option<LogoImage>> {
    let Some(path) = assets.resolve(name) else {
        return Ok(None);
    };
    let img = image::open(&path)
        .with_context(|| format!("decoding {}", path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    Ok(Some(LogoImage {
        width,
        height,
        rgba: img.into_raw(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_first_root_with_file() {
        let base = std::env::temp_dir().join(format!("wavewall-assets-{}", std::process::id()));
        let first = base.join("a");
        let second = base.join("b");
        std::fs::create_dir_all(&first).unwrap();
        std::fs::create_dir_all(&second).unwrap();
        std::fs::write(second.join("music.mp3"), b"id3").unwrap();

        let assets = AssetDir::with_roots(vec![first.clone(), second.clone()]);
        assert_eq!(assets.resolve("music.mp3"), Some(second.join("music.mp3")));
        assert_eq!(assets.resolve("logo.png"), None);

        std::fs::write(first.join("music.mp3"), b"id3").unwrap();
        assert_eq!(assets.resolve("music.mp3"), Some(first.join("music.mp3")));

        std::fs::remove_dir_all(&base).ok();
    }

    #[test]
    fn missing_logo_is_not_an_error() {
        let assets = AssetDir::with_roots(vec![PathBuf::from("/nonexistent/wavewall")]);
        assert!(matches!(load_logo(&assets, "logo.png"), Ok(None)));
    }
}

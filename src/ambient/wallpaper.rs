use std::path::{Path, PathBuf};
use std::time::SystemTime;

use image::imageops::FilterType;
use image::ImageFormat;

use crate::config::WallpaperConfig;

/// Largest size the blurred copy is rendered at. Smaller sources are kept.
const MAX_WIDTH: u32 = 1920;
const MAX_HEIGHT: u32 = 1080;
const BLUR_SIGMA: f32 = 3.0;
/// -15% of the 8-bit channel range.
const BRIGHTNESS_SHIFT: i32 = -38;

/// Produces the blurred, darkened background shared by all surfaces.
#[derive(Debug, Clone)]
pub struct WallpaperBlur {
    source: PathBuf,
    cache: PathBuf,
}

impl WallpaperBlur {
    pub fn new(source: PathBuf, cache: PathBuf) -> Self {
        Self { source, cache }
    }

    pub fn from_config(config: &WallpaperConfig) -> Self {
        Self::new(config.source.clone(), config.cache.clone())
    }

    /// Blurred wallpaper path, or `None` when the caller should fall back to
    /// a solid background. Runs the image work on a blocking thread.
    pub async fn prepare(self) -> Option<PathBuf> {
        match tokio::task::spawn_blocking(move || self.prepare_blocking()).await {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!("wallpaper task failed: {}", err);
                None
            }
        }
    }

    /// Reuse the cached copy when it is newer than the source, otherwise
    /// regenerate it.
    pub fn prepare_blocking(&self) -> Option<PathBuf> {
        let Some(source_mtime) = modified(&self.source) else {
            tracing::debug!(source = %self.source.display(), "wallpaper source missing");
            return None;
        };

        if let Some(cache_mtime) = modified(&self.cache) {
            if is_cache_fresh(source_mtime, cache_mtime) {
                tracing::debug!(cache = %self.cache.display(), "reusing blurred wallpaper");
                return Some(self.cache.clone());
            }
        }

        match self.render() {
            Ok(()) if self.cache.exists() => Some(self.cache.clone()),
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(source = %self.source.display(), "wallpaper blur failed: {}", err);
                None
            }
        }
    }

    fn render(&self) -> Result<(), image::ImageError> {
        let mut picture = image::open(&self.source)?;
        if picture.width() > MAX_WIDTH || picture.height() > MAX_HEIGHT {
            picture = picture.resize(MAX_WIDTH, MAX_HEIGHT, FilterType::Triangle);
        }
        let picture = picture.blur(BLUR_SIGMA).brighten(BRIGHTNESS_SHIFT);

        if let Some(parent) = self.cache.parent() {
            std::fs::create_dir_all(parent)?;
        }
        replace_file(&self.cache, |staging| {
            picture.save_with_format(staging, ImageFormat::Png)
        })
    }
}

/// Write `target` through a sibling staging file renamed into place, so a
/// failed write never leaves a truncated cache with a fresh mtime.
fn replace_file<F>(target: &Path, write: F) -> Result<(), image::ImageError>
where
    F: FnOnce(&Path) -> Result<(), image::ImageError>,
{
    let staging = staging_path(target);
    let result = write(&staging).and_then(|()| {
        std::fs::rename(&staging, target)?;
        Ok(())
    });
    if result.is_err() {
        let _ = std::fs::remove_file(&staging);
    }
    result
}

fn staging_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}

/// The cache is usable only when strictly newer than its source.
pub fn is_cache_fresh(source_mtime: SystemTime, cache_mtime: SystemTime) -> bool {
    cache_mtime > source_mtime
}

fn modified(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|meta| meta.modified()).ok()
}

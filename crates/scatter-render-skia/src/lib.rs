// File: crates/scatter-render-skia/src/lib.rs
// Summary: Skia rasterizer for scatter scenes. Compiled for real only with the `raster` feature.

use std::path::Path;

use scatter_core::Scene;

#[cfg(feature = "raster")]
mod raster;
#[cfg(feature = "raster")]
mod text;

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("scatter-render-skia built without the `raster` feature; rebuild with `--features raster`")]
    Disabled,
    #[error("failed to create a {0}x{1} raster surface")]
    Surface(i32, i32),
    #[error("PNG encoding failed")]
    Encode,
    #[error("failed to write {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone, Copy, Debug)]
pub struct RasterOptions {
    /// Device pixel ratio; 2.0 renders the 900x500 surface as 1800x1000 pixels.
    pub dpr: f32,
}

impl Default for RasterOptions {
    fn default() -> Self { Self { dpr: 1.0 } }
}

/// Whether this build can rasterize.
pub const fn is_enabled() -> bool {
    cfg!(feature = "raster")
}

/// Rasterize `scene` and encode it as PNG. Hidden (zero-opacity) groups such as
/// hover tooltips are left out.
pub fn render_png_bytes(scene: &Scene, opts: &RasterOptions) -> Result<Vec<u8>, RasterError> {
    #[cfg(feature = "raster")]
    {
        raster::render_png_bytes(scene, opts)
    }
    #[cfg(not(feature = "raster"))]
    {
        let _ = (scene, opts);
        Err(RasterError::Disabled)
    }
}

/// Rasterize `scene` to a PNG file, creating parent directories as needed.
pub fn render_png(scene: &Scene, opts: &RasterOptions, path: impl AsRef<Path>) -> Result<(), RasterError> {
    let path = path.as_ref();
    let bytes = render_png_bytes(scene, opts)?;
    let io = |source| RasterError::Io { path: path.display().to_string(), source };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io)?;
    }
    std::fs::write(path, bytes).map_err(io)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

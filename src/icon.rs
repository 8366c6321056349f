use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::config::Config;
use crate::error::IconError;
use crate::fonts;
use crate::models::IconSpec;
use crate::render;

fn ensure_dir(dir: &Path) -> Result<(), IconError> {
    fs::create_dir_all(dir).map_err(|source| IconError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Render one icon with the default settings and save it as PNG.
pub fn generate_icon(size: u32, output_path: &Path) -> Result<(), IconError> {
    generate_icon_with(&Config::default(), size, output_path)
}

pub fn generate_icon_with(config: &Config, size: u32, output_path: &Path) -> Result<(), IconError> {
    if size == 0 {
        return Err(IconError::InvalidSize(size));
    }
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    let mut font = fonts::resolve(&config.fonts);
    let canvas = render::render_icon(size, &config.style, &mut font);

    canvas
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|source| IconError::Write {
            path: output_path.to_path_buf(),
            source,
        })?;

    println!("Created {}", output_path.display());
    Ok(())
}

/// Render every spec into `output_dir` with the default settings.
pub fn run_batch(specs: &[IconSpec], output_dir: &Path) -> Result<Vec<PathBuf>, IconError> {
    run_batch_with(&Config::default(), specs, output_dir)
}

/// Render specs in order, stopping at the first failure. Every entry is
/// rendered from scratch, even when its size was already produced.
pub fn run_batch_with(
    config: &Config,
    specs: &[IconSpec],
    output_dir: &Path,
) -> Result<Vec<PathBuf>, IconError> {
    ensure_dir(output_dir)?;

    let mut written = Vec::with_capacity(specs.len());
    for spec in specs {
        let path = output_dir.join(spec.filename);
        generate_icon_with(config, spec.size, &path)?;
        written.push(path);
    }

    println!("All app icons created successfully!");
    Ok(written)
}

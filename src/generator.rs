use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{BUNDLE_SUBPATH, IconSpec};
use crate::error::IconError;
use crate::helpers::format_file_size;
use crate::icon;
use crate::logger::log_line;

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub bytes_written: usize,
}

impl fmt::Display for GeneratedIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generated {} ({}x{})", self.path.display(), self.width, self.height)
    }
}

fn source_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src")
}

/// Absolute destination of the app icon: one level above the generator's sources, into the asset bundle.
pub fn output_path() -> PathBuf {
    let src = source_dir();
    let root = src.parent().map(Path::to_path_buf).unwrap_or(src);
    root.join(BUNDLE_SUBPATH)
}

pub fn generate_icon() -> Result<GeneratedIcon, IconError> {
    generate_icon_at(&IconSpec::default(), &output_path())
}

/// Render `spec`, then write it to `path` as png, creating parent directories and
/// replacing any existing file.
pub fn generate_icon_at(spec: &IconSpec, path: &Path) -> Result<GeneratedIcon, IconError> {
    spec.validate()?;

    let canvas = icon::render(spec);
    let bytes = icon::encode_png(&canvas)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| IconError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    if let Ok(meta) = fs::metadata(path) {
        if meta.is_file() {
            log_line(&format!(
                "Overwriting existing {} ({})",
                path.display(),
                format_file_size(meta.len())
            ));
        }
    }

    fs::write(path, &bytes).map_err(|source| IconError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(GeneratedIcon {
        path: path.to_path_buf(),
        width: canvas.width(),
        height: canvas.height(),
        bytes_written: bytes.len(),
    })
}

//! Reading operator-chosen image files into staged avatars.

use std::path::{Path, PathBuf};

use image::ImageFormat;
use log::debug;
use thiserror::Error;
use userdesk_model::AvatarFile;

#[derive(Debug, Error)]
pub enum AvatarError {
    #[error("{} is not a supported image file", .path.display())]
    UnsupportedType { path: PathBuf },
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is empty", .path.display())]
    Empty { path: PathBuf },
}

/// Read an image file from disk. The media type comes from the file
/// extension; contents are not decoded.
pub async fn read_avatar(path: &Path) -> Result<AvatarFile, AvatarError> {
    let format =
        ImageFormat::from_path(path).map_err(|_| AvatarError::UnsupportedType {
            path: path.to_path_buf(),
        })?;

    let bytes = tokio::fs::read(path).await.map_err(|source| AvatarError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.is_empty() {
        return Err(AvatarError::Empty {
            path: path.to_path_buf(),
        });
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "avatar".to_string());

    debug!(
        "[Avatar] Read {} ({} bytes, {})",
        file_name,
        bytes.len(),
        format.to_mime_type()
    );

    Ok(AvatarFile::new(file_name, format.to_mime_type(), bytes))
}

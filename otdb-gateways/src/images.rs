use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use otdb_core::gateways::images::{ImageStorage, ImageStorageError};
use otdb_entities::id::Id;

type Result<T> = std::result::Result<T, ImageStorageError>;

/// The fixed URL segment that separates the public prefix of an image
/// URL from its storage-relative path, kept wire-compatible with the
/// hosted object store.
const URL_PATH_MARKER: &str = "/object/public/";

/// Image storage backed by a local directory.
///
/// Uploaded files are served under a public base URL that contains the
/// path marker, so the URL to storage-path mapping works the same way
/// as with a hosted object store.
#[derive(Debug, Clone)]
pub struct FsImageStorage {
    dir: PathBuf,
    public_base_url: String,
}

impl FsImageStorage {
    pub fn try_new<P: Into<PathBuf>>(directory: P, public_base_url: &str) -> anyhow::Result<Self> {
        if !public_base_url.contains(URL_PATH_MARKER) {
            anyhow::bail!("Public base URL {public_base_url} does not contain {URL_PATH_MARKER}");
        }
        let dir = directory.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create image directory {}", dir.display()))?;
        let mut public_base_url = public_base_url.to_owned();
        if !public_base_url.ends_with('/') {
            public_base_url.push('/');
        }
        Ok(Self {
            dir,
            public_base_url,
        })
    }
}

// Splits an optional data URL header off the payload. A comma never
// occurs in base64 data, so anything before one is the header.
fn split_payload(base64_data: &str) -> (Option<&str>, &str) {
    match base64_data.split_once(',') {
        Some((header, data)) => {
            let mime = header
                .strip_prefix("data:")
                .and_then(|h| h.split(';').next())
                .filter(|m| !m.is_empty());
            (mime, data)
        }
        None => (None, base64_data),
    }
}

// Clients compress their uploads to JPEG unless the payload header
// says otherwise.
fn extension_for(mime: Option<&str>) -> &'static str {
    match mime {
        Some("image/png") => "png",
        Some("image/gif") => "gif",
        Some("image/webp") => "webp",
        _ => "jpg",
    }
}

impl ImageStorage for FsImageStorage {
    fn upload_image(&self, base64_data: &str) -> Result<String> {
        let (mime, data) = split_payload(base64_data);
        let bytes = BASE64
            .decode(data.trim())
            .map_err(|_| ImageStorageError::InvalidPayload)?;
        if bytes.is_empty() {
            return Err(ImageStorageError::InvalidPayload);
        }
        let file_name = format!("{}.{}", Id::new(), extension_for(mime));
        let target = self.dir.join(&file_name);
        fs::write(&target, &bytes)
            .with_context(|| format!("Failed to store image {}", target.display()))?;
        log::debug!("Stored image {file_name} ({} bytes)", bytes.len());
        Ok(format!("{}{file_name}", self.public_base_url))
    }

    fn delete_images(&self, paths: &[String]) -> Result<usize> {
        let mut removed = 0;
        for path in paths {
            // Only the final segment maps to a local file. That also
            // keeps any ".." inside a foreign path from escaping the
            // directory.
            let Some(file_name) = Path::new(path).file_name() else {
                log::warn!("Skipping invalid image path {path}");
                continue;
            };
            match fs::remove_file(self.dir.join(file_name)) {
                Ok(()) => removed += 1,
                Err(err) => log::warn!("Failed to remove image {path}: {err}"),
            }
        }
        Ok(removed)
    }

    fn url_path_marker(&self) -> &str {
        URL_PATH_MARKER
    }
}

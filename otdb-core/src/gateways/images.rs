use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ImageStorageError {
    #[error("Invalid image payload")]
    InvalidPayload,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, ImageStorageError>;

/// Binary image storage behind public URLs.
pub trait ImageStorage {
    /// Store a base64 encoded image payload and return its public URL.
    ///
    /// The payload may be a full `data:` URL or the bare base64 data.
    fn upload_image(&self, base64_data: &str) -> Result<String>;

    /// Remove the given storage-relative paths in one batch and return
    /// the number of removed images.
    fn delete_images(&self, paths: &[String]) -> Result<usize>;

    /// The fixed marker that separates the public prefix of an image
    /// URL from its storage-relative path.
    fn url_path_marker(&self) -> &str;
}

/// Extract the storage-relative path from a public image URL.
///
/// Returns `None` for anything that is not a URL or that does not
/// contain the marker, such URLs are skipped on deletion.
pub fn storage_path_from_url(public_url: &str, marker: &str) -> Option<String> {
    Url::parse(public_url).ok()?;
    let (_, path) = public_url.split_once(marker)?;
    if path.is_empty() {
        return None;
    }
    Some(path.to_owned())
}

pub fn storage_paths_from_urls<'a, I>(public_urls: I, marker: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    public_urls
        .into_iter()
        .filter_map(|url| storage_path_from_url(url, marker))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "/object/public/";

    #[test]
    fn split_storage_path_behind_marker() {
        let url = "https://storage.example.com/object/public/tree-images/abc123.jpg";
        assert_eq!(
            storage_path_from_url(url, MARKER).unwrap(),
            "tree-images/abc123.jpg"
        );
    }

    #[test]
    fn skip_urls_without_marker() {
        assert_eq!(
            storage_path_from_url("https://example.com/foo.jpg", MARKER),
            None
        );
        assert_eq!(storage_path_from_url("not a url", MARKER), None);
        assert_eq!(
            storage_path_from_url("https://storage.example.com/object/public/", MARKER),
            None
        );
    }

    #[test]
    fn collect_paths_of_mixed_urls() {
        let urls = [
            "https://storage.example.com/object/public/tree-images/a.jpg".to_string(),
            "https://elsewhere.example.com/b.jpg".to_string(),
            "https://storage.example.com/object/public/tree-images/c.jpg".to_string(),
        ];
        let paths = storage_paths_from_urls(urls.iter().map(String::as_str), MARKER);
        assert_eq!(
            paths,
            vec![
                "tree-images/a.jpg".to_string(),
                "tree-images/c.jpg".to_string()
            ]
        );
    }
}

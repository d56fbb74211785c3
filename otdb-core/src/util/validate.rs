use thiserror::Error;

use otdb_entities::geo::{MapBbox, MapPoint};

pub use fast_chemail::is_valid_email;

/// Hard cap on the number of images attached to a single entry.
pub const MAX_IMAGES_PER_ENTRY: usize = 5;

pub fn is_valid_bbox(bbox: &MapBbox) -> bool {
    bbox.is_valid() && !bbox.is_empty()
}

/// A comment must contain visible text.
pub fn is_valid_comment_text(text: &str) -> bool {
    !text.trim().is_empty()
}

#[derive(Debug, Error)]
pub enum EntryInvalidation {
    #[error("Invalid title")]
    Title,
    #[error("Invalid description")]
    Description,
    #[error("Too many images")]
    ImageCount,
    #[error("Position out of bounds")]
    Position,
}

/// Validate the user supplied parts of a new map entry against the
/// configured region. The region edges are inclusive.
pub fn validate_new_entry(
    title: &str,
    description: &str,
    image_count: usize,
    pos: MapPoint,
    region: &MapBbox,
) -> Result<(), EntryInvalidation> {
    if title.trim().is_empty() {
        return Err(EntryInvalidation::Title);
    }
    if description.trim().is_empty() {
        return Err(EntryInvalidation::Description);
    }
    if image_count > MAX_IMAGES_PER_ENTRY {
        return Err(EntryInvalidation::ImageCount);
    }
    if !is_valid_bbox(region) || !region.contains_point(pos) {
        return Err(EntryInvalidation::Position);
    }
    Ok(())
}

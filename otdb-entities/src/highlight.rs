use crate::{geo::*, id::*, time::*};

/// A curated point of interest. Highlights carry neither votes nor
/// comments nor a status; they are created and removed by moderators.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub id          : Id,
    pub pos         : MapPoint,
    pub title       : String,
    pub description : String,
    pub image_urls  : Vec<String>,
    pub author_id   : Id,
    pub created_at  : Timestamp,
}

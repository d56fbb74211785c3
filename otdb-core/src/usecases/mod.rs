use crate::util::validate;

mod add_comment;
mod authorize;
mod change_user_role;
mod create_highlight;
mod create_report;
mod create_suggestion;
mod create_user;
mod delete_entry;
mod delete_user;
mod edit_comment;
mod error;
mod load_entries;
mod review_reports;
mod review_suggestions;
mod update_user;
mod vote_suggestion;


type Result<T> = std::result::Result<T, Error>;

pub use self::{
    add_comment::*, authorize::*, change_user_role::*, create_highlight::*, create_report::*,
    create_suggestion::*, create_user::*, delete_entry::*, delete_user::*, edit_comment::*,
    error::Error, load_entries::*, review_reports::*, review_suggestions::*, update_user::*,
    vote_suggestion::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, repositories::*};
}
use self::prelude::*;

/// Check the user supplied parts of a new entry before any image is
/// uploaded or any store call happens.
pub fn validate_new_entry(
    region: &MapBbox,
    lat: f64,
    lng: f64,
    title: &str,
    description: &str,
    image_count: usize,
) -> Result<MapPoint> {
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)?;
    validate::validate_new_entry(title, description, image_count, pos, region)?;
    Ok(pos)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryCounts {
    pub suggestions: usize,
    pub reports: usize,
    pub highlights: usize,
    pub users: usize,
}

pub fn entry_counts<D: Db>(db: &D) -> Result<EntryCounts> {
    Ok(EntryCounts {
        suggestions: db.count_suggestions()?,
        reports: db.count_reports()?,
        highlights: db.count_highlights()?,
        users: db.count_users()?,
    })
}

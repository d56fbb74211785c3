use strum::{Display, EnumCount, EnumIter, EnumString};

use crate::{comment::*, geo::*, id::*, time::*};

/// Triage status of a damage report.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, EnumIter, EnumCount, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum ReportStatus {
    Reported,
    InProgress,
    Resolved,
}

impl ReportStatus {
    pub const fn default() -> Self {
        Self::Reported
    }
}

/// A report about a damaged or endangered tree.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DamageReport {
    pub id          : Id,
    pub pos         : MapPoint,
    pub title       : String,
    pub description : String,
    pub image_urls  : Vec<String>,
    pub comments    : Vec<Comment>,
    pub author_id   : Id,
    pub author_name : String,
    pub created_at  : Timestamp,
    pub status      : ReportStatus,
}

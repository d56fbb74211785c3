use strum::{Display, EnumCount, EnumIter, EnumString};

use crate::{comment::*, geo::*, id::*, time::*};

/// Derived net vote score of a suggestion.
///
/// Always equals the number of upvoters minus the number of
/// downvoters; it is recomputed from the voter lists on every
/// mutation and never incremented in isolation.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct VoteScore(i64);

impl VoteScore {
    pub fn tally(upvoted_by: &[Id], downvoted_by: &[Id]) -> Self {
        Self(upvoted_by.len() as i64 - downvoted_by.len() as i64)
    }
}

impl From<i64> for VoteScore {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<VoteScore> for i64 {
    fn from(from: VoteScore) -> Self {
        from.0
    }
}

/// Lifecycle status of a planting suggestion.
///
/// There is no transition table: moderators may assign any status
/// from any status, including going back from `Planted`.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, EnumIter, EnumCount, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum SuggestionStatus {
    Proposed,
    Accepted,
    InProgress,
    Planted,
    Rejected,
}

impl SuggestionStatus {
    pub const fn default() -> Self {
        Self::Proposed
    }
}

/// A proposed planting location.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeSuggestion {
    pub id           : Id,
    pub pos          : MapPoint,
    pub title        : String,
    pub description  : String,
    pub image_urls   : Vec<String>,
    pub votes        : VoteScore,
    pub upvoted_by   : Vec<Id>,
    pub downvoted_by : Vec<Id>,
    pub comments     : Vec<Comment>,
    pub author_id    : Id,
    pub author_name  : String,
    pub created_at   : Timestamp,
    pub status       : SuggestionStatus,
}

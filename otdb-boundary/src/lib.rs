use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;
#[cfg(feature = "entity-conversions")]
pub use self::conv::InvalidRecord;

// The wire format of the original backing store: flat records with
// camel case keys, timestamps as unix milliseconds, statuses and
// roles as strings.

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct TreeSuggestion {
    pub id            : String,
    pub lat           : f64,
    pub lng           : f64,
    pub title         : String,
    pub description   : String,
    pub image_urls    : Vec<String>,
    pub votes         : i64,
    pub up_voted_by   : Vec<String>,
    pub down_voted_by : Vec<String>,
    pub comments      : Vec<Comment>,
    pub author_id     : String,
    pub author_name   : String,
    pub created_at    : i64,
    pub status        : SuggestionStatus,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct DamageReport {
    pub id          : String,
    pub lat         : f64,
    pub lng         : f64,
    pub title       : String,
    pub description : String,
    pub image_urls  : Vec<String>,
    pub comments    : Vec<Comment>,
    pub author_id   : String,
    pub author_name : String,
    pub created_at  : i64,
    pub status      : ReportStatus,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub id          : String,
    pub lat         : f64,
    pub lng         : f64,
    pub title       : String,
    pub description : String,
    pub image_urls  : Vec<String>,
    pub author_id   : String,
    pub created_at  : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author_id: String,
    pub author_name: String,
    pub author_role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_org: Option<String>,
    pub text: String,
    pub created_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_at: Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub email_confirmed: bool,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Guest,
    User,
    Moderator,
    Admin,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
pub enum SuggestionStatus {
    Proposed,
    Accepted,
    InProgress,
    Planted,
    Rejected,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
pub enum ReportStatus {
    Reported,
    InProgress,
    Resolved,
}

/// All collections of the store in one document, e.g. for snapshot
/// files and bulk import/export.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub suggestions: Vec<TreeSuggestion>,
    pub reports: Vec<DamageReport>,
    pub highlights: Vec<Highlight>,
    pub users: Vec<User>,
}

// Low-level store access traits.
// Each repository is responsible for a single record kind. Related
// records are only referenced by their id and never modified or
// loaded by another repository.
//
// All mutations are targeted: they touch exactly the fields they are
// named after instead of overwriting whole records.

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested record could not be found")]
    NotFound,
    #[error("The record already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

pub trait SuggestionRepo {
    fn create_suggestion(&self, _: TreeSuggestion) -> Result<()>;

    fn get_suggestion(&self, id: &str) -> Result<TreeSuggestion>;

    // Newest first
    fn recent_suggestions(&self, pagination: &Pagination) -> Result<Vec<TreeSuggestion>>;
    fn count_suggestions(&self) -> Result<usize>;

    fn update_suggestion_votes(
        &self,
        id: &str,
        upvoted_by: &[Id],
        downvoted_by: &[Id],
        votes: VoteScore,
    ) -> Result<()>;

    fn add_suggestion_comment(&self, id: &str, comment: Comment) -> Result<()>;
    fn edit_suggestion_comment(
        &self,
        id: &str,
        comment_id: &str,
        text: &str,
        edited_at: Timestamp,
    ) -> Result<()>;

    fn review_suggestions(&self, ids: &[&str], status: SuggestionStatus) -> Result<usize>;

    fn delete_suggestion(&self, id: &str) -> Result<()>;
}

pub trait ReportRepo {
    fn create_report(&self, _: DamageReport) -> Result<()>;

    fn get_report(&self, id: &str) -> Result<DamageReport>;

    // Newest first
    fn recent_reports(&self, pagination: &Pagination) -> Result<Vec<DamageReport>>;
    fn count_reports(&self) -> Result<usize>;

    fn add_report_comment(&self, id: &str, comment: Comment) -> Result<()>;
    fn edit_report_comment(
        &self,
        id: &str,
        comment_id: &str,
        text: &str,
        edited_at: Timestamp,
    ) -> Result<()>;

    fn review_reports(&self, ids: &[&str], status: ReportStatus) -> Result<usize>;

    fn delete_report(&self, id: &str) -> Result<()>;
}

pub trait HighlightRepo {
    fn create_highlight(&self, _: Highlight) -> Result<()>;

    fn get_highlight(&self, id: &str) -> Result<Highlight>;

    // Newest first
    fn recent_highlights(&self, pagination: &Pagination) -> Result<Vec<Highlight>>;
    fn count_highlights(&self) -> Result<usize>;

    fn delete_highlight(&self, id: &str) -> Result<()>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;
    fn delete_user(&self, id: &str) -> Result<()>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user(&self, id: &str) -> Result<Option<User>>;

    fn get_user_by_email(&self, email: &str) -> Result<User>;
    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>>;
}

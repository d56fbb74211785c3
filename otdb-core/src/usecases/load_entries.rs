use super::prelude::*;

// Reads are open to everyone including guests; the row cap keeps a
// runaway store from flooding the client.

pub fn recent_suggestions<R>(repo: &R, limit: u64) -> Result<Vec<TreeSuggestion>>
where
    R: SuggestionRepo,
{
    let pagination = Pagination {
        offset: None,
        limit: Some(limit),
    };
    Ok(repo.recent_suggestions(&pagination)?)
}

pub fn recent_reports<R>(repo: &R, limit: u64) -> Result<Vec<DamageReport>>
where
    R: ReportRepo,
{
    let pagination = Pagination {
        offset: None,
        limit: Some(limit),
    };
    Ok(repo.recent_reports(&pagination)?)
}

pub fn recent_highlights<R>(repo: &R, limit: u64) -> Result<Vec<Highlight>>
where
    R: HighlightRepo,
{
    let pagination = Pagination {
        offset: None,
        limit: Some(limit),
    };
    Ok(repo.recent_highlights(&pagination)?)
}

pub fn all_users<R>(repo: &R) -> Result<Vec<User>>
where
    R: UserRepo,
{
    Ok(repo.all_users()?)
}

use super::prelude::*;
use crate::authorization::user::authorize_role;

// Deleting an entry is a two step affair: the caller first fetches
// the doomed record (and with it the image urls whose stored files
// have to go as well), then confirms the deletion. Image cleanup
// happens between the two steps and must not block the second one.

pub fn prepare_suggestion_deletion<R>(repo: &R, actor: &User, id: &str) -> Result<TreeSuggestion>
where
    R: SuggestionRepo,
{
    authorize_role(actor, Role::Moderator).map_err(|_| Error::Forbidden)?;
    Ok(repo.get_suggestion(id)?)
}

pub fn delete_suggestion<R>(repo: &R, id: &str) -> Result<()>
where
    R: SuggestionRepo,
{
    log::info!("Deleting suggestion {id}");
    Ok(repo.delete_suggestion(id)?)
}

pub fn prepare_report_deletion<R>(repo: &R, actor: &User, id: &str) -> Result<DamageReport>
where
    R: ReportRepo,
{
    authorize_role(actor, Role::Moderator).map_err(|_| Error::Forbidden)?;
    Ok(repo.get_report(id)?)
}

pub fn delete_report<R>(repo: &R, id: &str) -> Result<()>
where
    R: ReportRepo,
{
    log::info!("Deleting report {id}");
    Ok(repo.delete_report(id)?)
}

pub fn prepare_highlight_deletion<R>(repo: &R, actor: &User, id: &str) -> Result<Highlight>
where
    R: HighlightRepo,
{
    authorize_role(actor, Role::Moderator).map_err(|_| Error::Forbidden)?;
    Ok(repo.get_highlight(id)?)
}

pub fn delete_highlight<R>(repo: &R, id: &str) -> Result<()>
where
    R: HighlightRepo,
{
    log::info!("Deleting highlight {id}");
    Ok(repo.delete_highlight(id)?)
}

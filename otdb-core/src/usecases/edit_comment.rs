use super::prelude::*;
use crate::{util::validate, RepoError};

/// Replace the text of an existing comment in place.
///
/// Only the original author may edit. The comment keeps its position
/// in the thread, its id, and its creation time; only the text and
/// the edit marker change.
pub fn edit_comment<R>(
    repo: &R,
    actor: &User,
    kind: EntryKind,
    entry_id: &str,
    comment_id: &str,
    text: &str,
) -> Result<()>
where
    R: SuggestionRepo + ReportRepo,
{
    if !validate::is_valid_comment_text(text) {
        return Err(Error::EmptyComment);
    }
    let author_id = match kind {
        EntryKind::Suggestion => {
            comment_author(&repo.get_suggestion(entry_id)?.comments, comment_id)?
        }
        EntryKind::Report => comment_author(&repo.get_report(entry_id)?.comments, comment_id)?,
        EntryKind::Highlight => return Err(Error::CommentsUnsupported),
    };
    if author_id != actor.id {
        return Err(Error::Forbidden);
    }
    let edited_at = Timestamp::now();
    let text = text.trim();
    match kind {
        EntryKind::Suggestion => {
            repo.edit_suggestion_comment(entry_id, comment_id, text, edited_at)?;
        }
        EntryKind::Report => {
            repo.edit_report_comment(entry_id, comment_id, text, edited_at)?;
        }
        EntryKind::Highlight => unreachable!(),
    }
    log::debug!("User {} edited comment {comment_id} on {kind} {entry_id}", actor.id);
    Ok(())
}

fn comment_author(comments: &[Comment], comment_id: &str) -> Result<Id> {
    comments
        .iter()
        .find(|c| c.id.as_str() == comment_id)
        .map(|c| c.author_id.clone())
        .ok_or(Error::Repo(RepoError::NotFound))
}

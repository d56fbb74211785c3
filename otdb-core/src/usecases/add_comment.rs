use super::prelude::*;
use crate::util::validate;

/// Append a comment to a suggestion or report thread.
///
/// The author's name, role, and organization are copied into the
/// comment so the thread stays readable after the account changes.
pub fn add_comment<R>(
    repo: &R,
    author: &User,
    kind: EntryKind,
    entry_id: &str,
    text: &str,
) -> Result<Comment>
where
    R: SuggestionRepo + ReportRepo,
{
    if !validate::is_valid_comment_text(text) {
        return Err(Error::EmptyComment);
    }
    if !kind.has_comments() {
        return Err(Error::CommentsUnsupported);
    }
    let comment = Comment {
        id: Id::new(),
        author_id: author.id.clone(),
        author_name: author.name.clone(),
        author_role: author.role,
        author_org: author.organization.clone(),
        text: text.trim().to_string(),
        created_at: Timestamp::now(),
        edited_at: None,
    };
    match kind {
        EntryKind::Suggestion => repo.add_suggestion_comment(entry_id, comment.clone())?,
        EntryKind::Report => repo.add_report_comment(entry_id, comment.clone())?,
        EntryKind::Highlight => unreachable!("checked by has_comments"),
    }
    log::debug!("User {} commented on {kind} {entry_id}", author.id);
    Ok(comment)
}

use super::*;

/// Append a comment to an entry on behalf of the signed-in user.
///
/// Guests are prompted to sign in instead; nothing is stored.
pub fn comment_entry<R: Db>(
    state: &mut AppState,
    repo: &R,
    notify: &dyn NotificationGateway,
    kind: EntryKind,
    entry_id: &str,
    text: &str,
) -> Result<()> {
    let Some(author) = state.session().cloned() else {
        state.request_sign_in();
        return Ok(());
    };
    let comment = usecases::add_comment(repo, &author, kind, entry_id, text)?;
    notify.notify(NotificationEvent::CommentAdded {
        kind,
        entry_id: &Id::from(entry_id),
        comment: &comment,
    });
    refresh_entry(state, repo, kind, entry_id)
}

/// Rewrite one of the signed-in user's own comments in place.
pub fn edit_entry_comment<R: Db>(
    state: &mut AppState,
    repo: &R,
    notify: &dyn NotificationGateway,
    kind: EntryKind,
    entry_id: &str,
    comment_id: &str,
    text: &str,
) -> Result<()> {
    let Some(actor) = state.session().cloned() else {
        state.request_sign_in();
        return Ok(());
    };
    usecases::edit_comment(repo, &actor, kind, entry_id, comment_id, text)?;
    notify.notify(NotificationEvent::CommentEdited {
        kind,
        entry_id: &Id::from(entry_id),
        comment_id: &Id::from(comment_id),
    });
    refresh_entry(state, repo, kind, entry_id)
}

// Replace the client copy of an entry with the stored one.
pub(crate) fn refresh_entry<R: Db>(
    state: &mut AppState,
    repo: &R,
    kind: EntryKind,
    id: &str,
) -> Result<()> {
    match kind {
        EntryKind::Suggestion => state.commit_suggestion(repo.get_suggestion(id)?),
        EntryKind::Report => state.commit_report(repo.get_report(id)?),
        EntryKind::Highlight => state.commit_highlight(repo.get_highlight(id)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn guests_are_prompted_instead_of_commenting() {
        let mut fixture = BackendFixture::new();
        fixture.seed_suggestion("s1");

        flows::comment_entry(
            &mut fixture.state,
            &fixture.db,
            &fixture.notify,
            EntryKind::Suggestion,
            "s1",
            "Nice spot",
        )
        .unwrap();

        assert!(fixture.state.sign_in_requested());
        assert!(fixture.db.get_suggestion("s1").unwrap().comments.is_empty());
    }

    #[test]
    fn append_a_comment_and_refresh_the_thread() {
        let mut fixture = BackendFixture::signed_in_as(Role::User);
        fixture.seed_suggestion("s1");

        flows::comment_entry(
            &mut fixture.state,
            &fixture.db,
            &fixture.notify,
            EntryKind::Suggestion,
            "s1",
            "Nice spot",
        )
        .unwrap();

        let committed = &fixture.state.collections().suggestions[0];
        assert_eq!(committed.comments.len(), 1);
        assert_eq!(committed.comments[0].text, "Nice spot");
        assert_eq!(committed.comments[0].author_name, "Maria");
    }

    #[test]
    fn empty_comments_are_rejected() {
        let mut fixture = BackendFixture::signed_in_as(Role::User);
        fixture.seed_suggestion("s1");

        assert!(flows::comment_entry(
            &mut fixture.state,
            &fixture.db,
            &fixture.notify,
            EntryKind::Suggestion,
            "s1",
            "   ",
        )
        .is_err());
        assert!(fixture.db.get_suggestion("s1").unwrap().comments.is_empty());
    }

    #[test]
    fn edit_the_own_comment_in_place() {
        let mut fixture = BackendFixture::signed_in_as(Role::User);
        fixture.seed_suggestion("s1");
        flows::comment_entry(
            &mut fixture.state,
            &fixture.db,
            &fixture.notify,
            EntryKind::Suggestion,
            "s1",
            "Nice spto",
        )
        .unwrap();
        let comment_id = fixture.state.collections().suggestions[0].comments[0]
            .id
            .clone();

        flows::edit_entry_comment(
            &mut fixture.state,
            &fixture.db,
            &fixture.notify,
            EntryKind::Suggestion,
            "s1",
            comment_id.as_str(),
            "Nice spot",
        )
        .unwrap();

        let committed = &fixture.state.collections().suggestions[0];
        assert_eq!(committed.comments.len(), 1);
        assert_eq!(committed.comments[0].text, "Nice spot");
        assert!(committed.comments[0].edited_at.is_some());
    }

    #[test]
    fn only_the_author_may_edit_a_comment() {
        let mut fixture = BackendFixture::signed_in_as(Role::User);
        fixture.seed_suggestion("s1");
        flows::comment_entry(
            &mut fixture.state,
            &fixture.db,
            &fixture.notify,
            EntryKind::Suggestion,
            "s1",
            "Nice spot",
        )
        .unwrap();
        let comment_id = fixture.state.collections().suggestions[0].comments[0]
            .id
            .clone();

        let other = fixture.create_user("Ben", "ben@example.org", Role::Moderator);
        fixture.state.set_session(other);

        assert!(flows::edit_entry_comment(
            &mut fixture.state,
            &fixture.db,
            &fixture.notify,
            EntryKind::Suggestion,
            "s1",
            comment_id.as_str(),
            "Hijacked",
        )
        .is_err());
        assert_eq!(
            fixture.db.get_suggestion("s1").unwrap().comments[0].text,
            "Nice spot"
        );
    }
}

use super::prelude::*;
use crate::authorization::user::authorize_role;

/// Assign a new status to the given suggestions.
///
/// Any status may be assigned from any status; there is no transition
/// table. Requires at least the moderator role.
pub fn review_suggestions<R>(
    repo: &R,
    reviewer: &User,
    ids: &[&str],
    status: SuggestionStatus,
) -> Result<usize>
where
    R: SuggestionRepo,
{
    if ids.is_empty() {
        return Err(Error::EmptyIdList);
    }
    authorize_role(reviewer, Role::Moderator).map_err(|_| Error::Forbidden)?;
    log::info!(
        "Changing status of {} suggestion(s) to {status} on behalf of {}",
        ids.len(),
        reviewer.id
    );
    let count = repo.review_suggestions(ids, status)?;
    log::info!("Changed status of {count} suggestion(s) to {status}");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };
    use otdb_entities::builders::*;

    fn fixture() -> MockDb {
        let db = MockDb::default();
        db.suggestions
            .borrow_mut()
            .push(TreeSuggestion::build().id("s1").finish());
        db.suggestions
            .borrow_mut()
            .push(TreeSuggestion::build().id("s2").finish());
        db
    }

    #[test]
    fn moderator_changes_status() {
        let db = fixture();
        let moderator = User::build().role(Role::Moderator).finish();

        let count =
            review_suggestions(&db, &moderator, &["s1"], SuggestionStatus::Accepted).unwrap();
        assert_eq!(count, 1);
        assert_eq!(db.get_suggestion("s1").unwrap().status, SuggestionStatus::Accepted);
        assert_eq!(db.get_suggestion("s2").unwrap().status, SuggestionStatus::Proposed);
    }

    #[test]
    fn any_status_is_reachable_from_any_other() {
        let db = fixture();
        let admin = User::build().role(Role::Admin).finish();

        for status in [
            SuggestionStatus::Planted,
            SuggestionStatus::Rejected,
            SuggestionStatus::Proposed,
            SuggestionStatus::InProgress,
        ] {
            review_suggestions(&db, &admin, &["s1"], status).unwrap();
            assert_eq!(db.get_suggestion("s1").unwrap().status, status);
        }
    }

    #[test]
    fn several_suggestions_at_once() {
        let db = fixture();
        let moderator = User::build().role(Role::Moderator).finish();

        let count =
            review_suggestions(&db, &moderator, &["s1", "s2"], SuggestionStatus::InProgress)
                .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn plain_users_must_not_review() {
        let db = fixture();
        let user = User::build().role(Role::User).finish();

        assert!(matches!(
            review_suggestions(&db, &user, &["s1"], SuggestionStatus::Accepted),
            Err(Error::Forbidden)
        ));
        assert_eq!(db.get_suggestion("s1").unwrap().status, SuggestionStatus::Proposed);
    }

    #[test]
    fn reject_empty_id_list() {
        let db = fixture();
        let moderator = User::build().role(Role::Moderator).finish();
        assert!(matches!(
            review_suggestions(&db, &moderator, &[], SuggestionStatus::Accepted),
            Err(Error::EmptyIdList)
        ));
    }
}

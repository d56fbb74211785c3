use super::*;

/// Load the capped collections from the store and make them the new
/// confirmed client state.
pub fn fetch_snapshot<R: Db>(state: &mut AppState, repo: &R, fetch_limit: u64) -> Result<()> {
    let suggestions = usecases::recent_suggestions(repo, fetch_limit)?;
    let reports = usecases::recent_reports(repo, fetch_limit)?;
    let highlights = usecases::recent_highlights(repo, fetch_limit)?;
    let users = usecases::all_users(repo)?;
    info!(
        "Fetched {} suggestion(s), {} report(s), {} highlight(s), {} user(s)",
        suggestions.len(),
        reports.len(),
        highlights.len(),
        users.len()
    );
    state.commit_snapshot(suggestions, reports, highlights, users);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn fetch_commits_capped_collections_newest_first() {
        let mut fixture = BackendFixture::new();
        for (id, millis) in [("s1", 10), ("s2", 20), ("s3", 30)] {
            fixture
                .db
                .create_suggestion(
                    TreeSuggestion::build()
                        .id(id)
                        .created_at(Timestamp::from_millis(millis))
                        .finish(),
                )
                .unwrap();
        }
        fixture.create_user("Maria", "maria@example.org", Role::User);

        flows::fetch_snapshot(&mut fixture.state, &fixture.db, 2).unwrap();

        let collections = fixture.state.collections();
        let ids: Vec<_> = collections
            .suggestions
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["s3", "s2"]);
        assert_eq!(collections.users.len(), 1);
        assert_eq!(fixture.state.load_phase(), LoadPhase::Ready);
    }

    #[test]
    fn fetch_from_an_empty_store() {
        let mut fixture = BackendFixture::new();
        flows::fetch_snapshot(&mut fixture.state, &fixture.db, 500).unwrap();
        assert_eq!(fixture.state.load_phase(), LoadPhase::Ready);
        assert!(fixture.state.collections().suggestions.is_empty());
    }
}

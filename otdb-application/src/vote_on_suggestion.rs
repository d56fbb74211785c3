use super::*;

/// Apply one vote press of the signed-in user.
///
/// Guests are prompted to sign in instead; nothing is stored. The
/// committed record is the one the store confirmed, including the
/// recomputed score.
pub fn vote_on_suggestion<R: Db>(
    state: &mut AppState,
    repo: &R,
    suggestion_id: &str,
    direction: usecases::VoteDirection,
) -> Result<()> {
    let Some(voter) = state.session().cloned() else {
        state.request_sign_in();
        return Ok(());
    };
    let suggestion = usecases::vote_suggestion(repo, &voter, suggestion_id, direction)?;
    state.commit_suggestion(suggestion);
    Ok(())
}

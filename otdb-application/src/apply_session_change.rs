use super::*;

/// Install or drop the signed-in user.
///
/// A session for an unknown account provisions a profile with the
/// default role first, so the rest of the application can rely on
/// every session having a stored user. Dropping the session resets
/// the view state.
pub fn apply_session_change<R: Db>(
    state: &mut AppState,
    repo: &R,
    session: Option<usecases::NewUser>,
) -> Result<()> {
    match session {
        Some(new_user) => {
            let user = usecases::create_user_from_session(repo, new_user)?;
            debug!("Session user is now {} ({})", user.name, user.id);
            state.commit_user(user.clone());
            state.set_session(user);
        }
        None => {
            debug!("Session ended");
            state.clear_session();
        }
    }
    Ok(())
}

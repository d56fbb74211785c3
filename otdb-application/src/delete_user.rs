use super::*;

/// Remove an account on behalf of the signed-in admin. Admins cannot
/// remove themselves.
pub fn delete_user<R: Db>(state: &mut AppState, repo: &R, user_id: &str) -> Result<()> {
    let Some(actor) = state.session().cloned() else {
        return Err(usecases::Error::Unauthorized.into());
    };
    usecases::delete_user(repo, &actor, user_id)?;
    state.remove_user(user_id);
    Ok(())
}

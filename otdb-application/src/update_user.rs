use super::*;

/// Overwrite the editable profile fields of an account on behalf of
/// the signed-in admin.
pub fn update_user<R: Db>(
    state: &mut AppState,
    repo: &R,
    user_id: &str,
    changes: usecases::UserProfileChanges,
) -> Result<User> {
    let Some(actor) = state.session().cloned() else {
        return Err(usecases::Error::Unauthorized.into());
    };
    let user = usecases::update_user(repo, &actor, user_id, changes)?;
    state.commit_user(user.clone());
    Ok(user)
}

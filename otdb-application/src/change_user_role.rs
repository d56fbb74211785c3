use super::*;

/// Assign a new role to another account on behalf of the signed-in
/// admin.
pub fn change_user_role<R: Db>(
    state: &mut AppState,
    repo: &R,
    notify: &dyn NotificationGateway,
    user_email: &str,
    role: Role,
) -> Result<()> {
    let Some(account) = state.session().cloned() else {
        return Err(usecases::Error::Unauthorized.into());
    };
    usecases::change_user_role(repo, account.email.as_str(), user_email, role).map_err(|err| {
        warn!("Failed to change role for {user_email}: {err}");
        err
    })?;
    let user = repo.get_user_by_email(user_email)?;
    notify.notify(NotificationEvent::UserRoleChanged { user: &user });
    state.commit_user(user);
    Ok(())
}

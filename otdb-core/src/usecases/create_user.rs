use super::prelude::*;
use crate::util::validate;

/// Account data as delivered by the identity provider.
///
/// The id is the provider's subject id, not a freshly minted one, so
/// repeated sign-ins map to the same account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: Id,
    pub name: String,
    pub email: EmailAddress,
    pub email_confirmed: bool,
    pub organization: Option<String>,
}

pub fn create_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    if !validate::is_valid_email(u.email.as_str()) {
        return Err(Error::EmailAddress);
    }
    if repo.try_get_user(u.id.as_str())?.is_some()
        || repo.try_get_user_by_email(u.email.as_str())?.is_some()
    {
        return Err(Error::UserExists);
    }
    let new_user = User {
        id: u.id,
        name: u.name,
        email: u.email,
        email_confirmed: u.email_confirmed,
        role: Role::User,
        organization: u.organization,
        created_at: Timestamp::now(),
    };
    log::debug!("Creating new user: email = {}", new_user.email);
    repo.create_user(&new_user)?;
    Ok(new_user)
}

/// Look up the signed-in account, creating it on first sign-in.
pub fn create_user_from_session<R>(repo: &R, u: NewUser) -> Result<User>
where
    R: UserRepo,
{
    if let Some(user) = repo.try_get_user(u.id.as_str())? {
        return Ok(user);
    }
    create_user(repo, u)
}

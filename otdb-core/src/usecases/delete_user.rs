use super::prelude::*;
use crate::authorization::user::authorize_role;

/// Remove an account. Admin only, and never the own account.
pub fn delete_user<R: UserRepo>(repo: &R, actor: &User, user_id: &str) -> Result<()> {
    authorize_role(actor, Role::Admin).map_err(|_| Error::Forbidden)?;
    if actor.id.as_str() == user_id {
        return Err(Error::SelfDeletion);
    }
    repo.delete_user(user_id)?;
    log::info!("Deleted user {user_id}");
    Ok(())
}

use std::result::Result as StdResult;

use thiserror::Error;

use otdb_entities::user::{Role, User};

#[derive(Debug, Error)]
pub enum Error {
    #[error("unauthorized role")]
    UnauthorizedRole,
}

pub type Result<T> = StdResult<T, Error>;

pub fn authorize_role(user: &User, min_required_role: Role) -> Result<()> {
    if user.role < min_required_role {
        return Err(Error::UnauthorizedRole);
    }
    Ok(())
}

/// The effective role of an optional session, `Guest` when signed out.
pub fn session_role(user: Option<&User>) -> Role {
    user.map(|user| user.role).unwrap_or_default()
}

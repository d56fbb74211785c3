use super::prelude::*;

pub fn authorize_user_by_email(db: &dyn Db, email: &str, min_required_role: Role) -> Result<User> {
    if let Some(user) = db.try_get_user_by_email(email)? {
        return crate::authorization::user::authorize_role(&user, min_required_role)
            .map(|()| user)
            .map_err(|_| Error::Unauthorized);
    }
    Err(Error::Unauthorized)
}

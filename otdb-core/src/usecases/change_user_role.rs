use super::prelude::*;
use crate::authorization::user::authorize_role;

/// Assign a new role to another account.
///
/// Only admins may change roles, any role can be assigned, and nobody
/// can change their own role.
pub fn change_user_role<D: Db>(
    db: &D,
    account_email: &str,
    user_email: &str,
    role: Role,
) -> Result<()> {
    log::info!("Changing role to {role:?} for {user_email}");
    let account = db
        .try_get_user_by_email(account_email)?
        .ok_or(Error::UserDoesNotExist)?;
    let mut user = db
        .try_get_user_by_email(user_email)?
        .ok_or(Error::UserDoesNotExist)?;
    authorize_role(&account, Role::Admin).map_err(|_| Error::Forbidden)?;
    if account.id == user.id {
        return Err(Error::Forbidden);
    }
    user.role = role;
    db.update_user(&user)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };
    use otdb_entities::builders::*;

    fn fixture() -> MockDb {
        let db = MockDb::default();
        db.users.borrow_mut().push(
            User::build()
                .id("a1")
                .email("admin@tld.com")
                .role(Role::Admin)
                .finish(),
        );
        db.users.borrow_mut().push(
            User::build()
                .id("u1")
                .email("user@tld.com")
                .role(Role::User)
                .finish(),
        );
        db
    }

    #[test]
    fn admin_promotes_a_user() {
        let db = fixture();
        change_user_role(&db, "admin@tld.com", "user@tld.com", Role::Moderator).unwrap();
        assert_eq!(
            db.get_user_by_email("user@tld.com").unwrap().role,
            Role::Moderator
        );
    }

    #[test]
    fn admin_appoints_another_admin() {
        let db = fixture();
        change_user_role(&db, "admin@tld.com", "user@tld.com", Role::Admin).unwrap();
        assert_eq!(db.get_user_by_email("user@tld.com").unwrap().role, Role::Admin);
    }

    #[test]
    fn moderators_must_not_change_roles() {
        let db = fixture();
        db.users.borrow_mut().push(
            User::build()
                .id("m1")
                .email("mod@tld.com")
                .role(Role::Moderator)
                .finish(),
        );
        assert!(matches!(
            change_user_role(&db, "mod@tld.com", "user@tld.com", Role::Moderator),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn nobody_changes_their_own_role() {
        let db = fixture();
        assert!(matches!(
            change_user_role(&db, "admin@tld.com", "admin@tld.com", Role::User),
            Err(Error::Forbidden)
        ));
        assert_eq!(db.get_user_by_email("admin@tld.com").unwrap().role, Role::Admin);
    }

    #[test]
    fn unknown_account_or_user() {
        let db = fixture();
        assert!(matches!(
            change_user_role(&db, "ghost@tld.com", "user@tld.com", Role::Moderator),
            Err(Error::UserDoesNotExist)
        ));
        assert!(matches!(
            change_user_role(&db, "admin@tld.com", "ghost@tld.com", Role::Moderator),
            Err(Error::UserDoesNotExist)
        ));
    }
}

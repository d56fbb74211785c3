use super::prelude::*;
use crate::{authorization::user::authorize_role, util::validate};

#[derive(Debug, Clone)]
pub struct UserProfileChanges {
    pub name: String,
    pub email: EmailAddress,
    pub role: Role,
    pub organization: Option<String>,
}

/// Overwrite the editable profile fields of an account.
///
/// Admin only. Admins may edit their own profile but not their own
/// role, so a deployment can never lock out its last admin by
/// accident.
pub fn update_user<R: UserRepo>(
    repo: &R,
    actor: &User,
    user_id: &str,
    changes: UserProfileChanges,
) -> Result<User> {
    authorize_role(actor, Role::Admin).map_err(|_| Error::Forbidden)?;
    if !validate::is_valid_email(changes.email.as_str()) {
        return Err(Error::EmailAddress);
    }
    let mut user = repo.get_user(user_id)?;
    let UserProfileChanges {
        name,
        email,
        role,
        organization,
    } = changes;
    if actor.id == user.id && role != user.role {
        return Err(Error::Forbidden);
    }
    user.name = name;
    user.email = email;
    user.role = role;
    user.organization = organization;
    repo.update_user(&user)?;
    log::info!("Updated profile of user {user_id}");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };
    use crate::RepoError;
    use otdb_entities::builders::*;

    fn changes() -> UserProfileChanges {
        UserProfileChanges {
            name: "Bob".into(),
            email: EmailAddress::new_unchecked("bob@tld.com".into()),
            role: Role::Moderator,
            organization: Some("stadtwerke".into()),
        }
    }

    fn fixture() -> (MockDb, User) {
        let admin = User::build().id("a1").role(Role::Admin).finish();
        let db = MockDb::default();
        db.users.borrow_mut().push(admin.clone());
        db.users
            .borrow_mut()
            .push(User::build().id("u1").email("u1@tld.com").finish());
        (db, admin)
    }

    #[test]
    fn admin_edits_a_profile() {
        let (db, admin) = fixture();
        let updated = update_user(&db, &admin, "u1", changes()).unwrap();
        assert_eq!(updated.name, "Bob");
        assert_eq!(updated.email.as_str(), "bob@tld.com");
        assert_eq!(updated.role, Role::Moderator);
        assert_eq!(updated.organization.as_deref(), Some("stadtwerke"));
        assert_eq!(db.get_user("u1").unwrap(), updated);
    }

    #[test]
    fn non_admins_must_not_edit_profiles() {
        let (db, _) = fixture();
        let moderator = User::build().id("m1").role(Role::Moderator).finish();
        assert!(matches!(
            update_user(&db, &moderator, "u1", changes()),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn admins_must_not_change_their_own_role() {
        let (db, admin) = fixture();
        let own_changes = UserProfileChanges {
            role: Role::User,
            email: admin.email.clone(),
            ..changes()
        };
        assert!(matches!(
            update_user(&db, &admin, "a1", own_changes),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn admins_may_rename_themselves() {
        let (db, admin) = fixture();
        let own_changes = UserProfileChanges {
            name: "Head Gardener".into(),
            email: EmailAddress::new_unchecked("head@tld.com".into()),
            role: Role::Admin,
            organization: None,
        };
        let updated = update_user(&db, &admin, "a1", own_changes).unwrap();
        assert_eq!(updated.name, "Head Gardener");
        assert_eq!(updated.role, Role::Admin);
    }

    #[test]
    fn reject_invalid_email() {
        let (db, admin) = fixture();
        let bad = UserProfileChanges {
            email: EmailAddress::new_unchecked("bob@".into()),
            ..changes()
        };
        assert!(matches!(
            update_user(&db, &admin, "u1", bad),
            Err(Error::EmailAddress)
        ));
    }

    #[test]
    fn unknown_user_id() {
        let (db, admin) = fixture();
        assert!(matches!(
            update_user(&db, &admin, "ghost", changes()),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}

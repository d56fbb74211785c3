use strum::{Display, EnumIter, EnumString};

use crate::{email::*, id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id              : Id,
    pub name            : String,
    pub email           : EmailAddress,
    pub email_confirmed : bool,
    pub role            : Role,
    pub organization    : Option<String>,
    pub created_at      : Timestamp,
}

/// Authorization level of a user.
///
/// The variants are ordered, policy checks compare against a minimum
/// required role. `Guest` is the floor used when no session exists.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, EnumIter, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Guest     = 0,
    User      = 1,
    Moderator = 2,
    Admin     = 3,
}

impl Default for Role {
    fn default() -> Role {
        Role::Guest
    }
}

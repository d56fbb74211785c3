use crate::{id::*, time::*, user::*};

/// A single comment in the ordered thread of a suggestion or a damage
/// report. Author details are denormalized at creation time so a
/// comment stays renderable after the author changed or left.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id           : Id,
    pub author_id    : Id,
    pub author_name  : String,
    pub author_role  : Role,
    pub author_org   : Option<String>,
    pub text         : String,
    pub created_at   : Timestamp,
    pub edited_at    : Option<Timestamp>,
}

impl Comment {
    pub fn is_edited(&self) -> bool {
        self.edited_at.is_some()
    }
}

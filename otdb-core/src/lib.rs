#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # otdb-core
//!
//! Repository and gateway abstractions together with the use cases of
//! OpenTreeDB.

pub mod authorization;
pub mod db;
pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use otdb_entities::{
        comment::*, email::*, entry::*, geo::*, highlight::*, id::*, report::*, suggestion::*,
        time::*, user::*,
    };
}

pub use self::repositories::Error as RepoError;

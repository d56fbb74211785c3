#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # otdb-entities
//!
//! Reusable, agnostic domain entities for OpenTreeDB.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod comment;
pub mod email;
pub mod entry;
pub mod geo;
pub mod highlight;
pub mod id;
pub mod report;
pub mod suggestion;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;

#[macro_use]
extern crate log;

mod apply_session_change;
mod change_user_role;
mod comment_entry;
mod create_entry;
mod delete_entry;
mod delete_user;
mod fetch_snapshot;
mod review_entry;
mod snapshot_io;
mod update_user;
mod vote_on_suggestion;

pub mod prelude {
    pub use super::{
        apply_session_change::*, change_user_role::*, comment_entry::*, create_entry::*,
        delete_entry::*, delete_user::*, fetch_snapshot::*, review_entry::*, snapshot_io::*,
        update_user::*, vote_on_suggestion::*,
    };
}

pub mod error;
pub mod state;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use otdb_core::{
    db::*,
    entities::*,
    gateways::{
        images::{storage_paths_from_urls, ImageStorage},
        notify::{NotificationEvent, NotificationGateway},
    },
    repositories::*,
    usecases,
};

pub(crate) use self::state::{AppState, Notice};

#[cfg(test)]
pub(crate) mod tests;

mod images;
mod notify;

pub use self::{images::FsImageStorage, notify::Notify};

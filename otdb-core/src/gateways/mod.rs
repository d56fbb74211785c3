pub mod images;
pub mod notify;

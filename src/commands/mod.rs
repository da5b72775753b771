pub mod show;
pub mod topics;

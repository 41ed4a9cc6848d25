pub mod booking;
pub mod movie;
pub mod show;
pub mod user;

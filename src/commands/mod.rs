pub mod auth;
pub mod bookings;
pub mod movies;
pub mod shows;

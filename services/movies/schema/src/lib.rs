//! sea-orm entities for the movies service database.

pub mod actors;
pub mod comments;
pub mod movies;
pub mod reviews;
pub mod securities;
pub mod users;

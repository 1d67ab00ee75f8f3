pub mod actor;
pub mod comment;
pub mod movie;
pub mod report;
pub mod review;
pub mod security;
pub mod user;

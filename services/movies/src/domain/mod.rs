pub mod repository;
pub mod rules;
pub mod types;
pub mod validation;

pub mod db;
pub mod password;
pub mod queries;
pub mod uow;

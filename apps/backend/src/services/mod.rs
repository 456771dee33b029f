pub mod articles;
pub mod auth;
pub mod projects;
pub mod skills;
pub mod users;
pub mod validate;

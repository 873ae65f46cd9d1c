pub mod events;
pub mod projects;
pub mod service;
pub mod teams;
pub mod user;

pub mod error;
pub mod event;
pub mod project;
pub mod response;
pub mod team;
pub mod user;

pub mod create;
pub mod delete;
pub mod members;
pub mod read;
pub mod update;

pub mod hello;
pub mod ping;
pub mod user;

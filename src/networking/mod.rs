pub mod handler;
pub mod server;

pub mod client;
pub mod config;
pub mod destination;
pub mod link;
pub mod status;

pub mod config_error;
pub mod not_found;
pub mod redirect;

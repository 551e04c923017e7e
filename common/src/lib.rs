//! Shared logic for the charger link resolver: route table, configuration,
//! identifier extraction, URL templates, client classification and the
//! open-app/fallback state machine. Nothing in this crate depends on a
//! browser, so it builds and tests natively.

pub mod model;
pub mod resolver;
pub mod routes;
pub mod template;

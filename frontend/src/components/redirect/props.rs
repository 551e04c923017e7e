//! Properties for the `RedirectPage`.

use std::rc::Rc;

use common::model::config::ResolverConfig;
use common::model::link::PathParams;
use yew::prelude::*;

/// Everything the page needs to resolve one link. Set by the route table in
/// `app.rs` and never changed while the page is mounted.
#[derive(Properties, PartialEq, Clone)]
pub struct RedirectProps {
    /// Loaded once at startup and shared.
    pub config: Rc<ResolverConfig>,

    /// Identifiers bound from an `/r/{stationId}/{chargerBoxId}` path,
    /// already percent-decoded. Empty for `/q`.
    #[prop_or_default]
    pub path_params: PathParams,

    /// Raw search string of the current location, including the leading `?`.
    #[prop_or_default]
    pub query: String,
}

use serde::Deserialize;
use utoipa::IntoParams;

/// Query string of the search endpoint
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Substring matched against item names
    pub q: Option<String>,
}

use serde::{Deserialize, Serialize};

/// RTE OAuth token endpoint (client-credentials grant).
const DEFAULT_TOKEN_URL: &str = "https://digital.iservices.rte-france.com/token/oauth/";

/// RTE actual generation per unit endpoint.
const DEFAULT_GENERATION_URL: &str =
    "https://digital.iservices.rte-france.com/open_api/actual_generation/v1/actual_generations_per_unit";

/// API endpoints and client credentials for the generation data provider.
///
/// The id/secret pair is issued per application on the RTE developer portal.
/// Endpoints are overridable so tests (or a mirror deployment) can point the
/// provider elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiCredentials {
    /// OAuth token endpoint, POSTed with HTTP Basic auth.
    pub token_url: String,

    /// Actual-generations-per-unit endpoint, queried with a Bearer token.
    pub generation_url: String,

    /// OAuth client id.
    pub client_id: String,

    /// OAuth client secret.
    pub client_secret: String,
}

impl ApiCredentials {
    /// Credentials against the default RTE endpoints.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            token_url: DEFAULT_TOKEN_URL.to_string(),
            generation_url: DEFAULT_GENERATION_URL.to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl Default for ApiCredentials {
    fn default() -> Self {
        Self::new("", "")
    }
}

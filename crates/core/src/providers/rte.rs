use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::traits::{AccessToken, GenerationProvider};
use crate::errors::CoreError;
use crate::models::generation::{GenerationsEnvelope, UnitGeneration};
use crate::models::settings::ApiCredentials;

const PROVIDER_NAME: &str = "RTE";

/// RTE open API provider for actual generation data.
///
/// - **Auth**: OAuth client-credentials grant; the token endpoint is POSTed
///   with HTTP Basic auth and returns a Bearer token.
/// - **Data**: `actual_generations_per_unit`, queried with RFC 3339
///   `start_date`/`end_date` parameters. The API caps a single request at
///   7 days of data.
pub struct RteProvider {
    client: Client,
    credentials: ApiCredentials,
}

impl RteProvider {
    pub fn new(credentials: ApiCredentials) -> Self {
        let builder = Client::builder().timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            credentials,
        }
    }
}

#[async_trait]
impl GenerationProvider for RteProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn request_access_token(&self) -> Result<AccessToken, CoreError> {
        debug!(url = %self.credentials.token_url, "requesting new access token");

        let token: AccessToken = self
            .client
            .post(&self.credentials.token_url)
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Auth {
                provider: PROVIDER_NAME.into(),
                message: format!("Failed to parse token response: {e}"),
            })?;

        Ok(token)
    }

    async fn actual_generations_per_unit(
        &self,
        access_token: &str,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Result<Vec<UnitGeneration>, CoreError> {
        debug!(%start, %end, "fetching actual generations per unit");

        let envelope: GenerationsEnvelope = self
            .client
            .get(&self.credentials.generation_url)
            .bearer_auth(access_token)
            .query(&[
                ("start_date", start.to_rfc3339()),
                ("end_date", end.to_rfc3339()),
            ])
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: PROVIDER_NAME.into(),
                message: format!("Failed to parse generation response for {start}..{end}: {e}"),
            })?;

        Ok(envelope.actual_generations_per_unit)
    }
}

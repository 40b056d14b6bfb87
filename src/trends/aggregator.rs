use crate::api::{MockTrendProvider, ProviderError, TrendProvider, TwitterClient};
use crate::cli::TwitterSettings;
use crate::models::{TrendEntry, TrendQuery, TrendResult};
use crate::trends::ProviderCredentials;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Name of the single entry returned when a live fetch fails.
pub const FALLBACK_NAME: &str = "test";
/// Link of the single entry returned when a live fetch fails.
pub const FALLBACK_LINK: &str = "MyTweet";

/// Why a live fetch produced no usable result.
#[derive(Error, Debug, Clone)]
pub enum LiveFetchError {
    #[error("provider failure: {0}")]
    Provider(#[from] ProviderError),

    #[error("could not build provider session: {0}")]
    Session(String),

    #[error("live fetch did not complete within {0:?}")]
    TimedOut(Duration),
}

/// Answers trend queries from the live provider or, without credentials, from mock data.
pub struct TrendAggregator {
    api_base_url: String,
    timeout: Duration,
    mock: MockTrendProvider,
}

impl TrendAggregator {
    pub fn new(settings: &TwitterSettings, timeout: Duration) -> Self {
        Self {
            api_base_url: settings.api_base_url.clone(),
            timeout,
            mock: MockTrendProvider::new(),
        }
    }

    /// Returns at most `query.requested_count` trends for `query.location_id`.
    ///
    /// With complete credentials the live provider is queried once; any failure,
    /// whatever its kind, yields the single fallback entry. With incomplete
    /// credentials exactly `requested_count` synthetic entries are returned.
    pub async fn fetch_trends(
        &self,
        query: &TrendQuery,
        creds: &ProviderCredentials,
    ) -> TrendResult {
        if query.requested_count == 0 {
            debug!("Zero trends requested for {}", query.location_id);
            return TrendResult::new();
        }

        let Some(oauth) = creds.complete() else {
            info!(
                "Provider credentials incomplete, serving {} mock trends for {}",
                query.requested_count, query.location_id
            );
            return self.mock.trends(query.requested_count);
        };

        let outcome = self
            .bounded(async {
                let client = TwitterClient::new(oauth, &self.api_base_url)
                    .map_err(|e| LiveFetchError::Session(e.to_string()))?;
                collect_bounded(&client, query).await
            })
            .await;

        settle(query, outcome)
    }

    /// Applies the live-fetch time budget.
    async fn bounded<F>(&self, live: F) -> Result<TrendResult, LiveFetchError>
    where
        F: Future<Output = Result<TrendResult, LiveFetchError>>,
    {
        match tokio::time::timeout(self.timeout, live).await {
            Ok(outcome) => outcome,
            Err(_) => Err(LiveFetchError::TimedOut(self.timeout)),
        }
    }
}

/// Takes the provider's trends in ranking order, stopping once the requested count is reached.
pub async fn collect_bounded<P>(provider: &P, query: &TrendQuery) -> Result<TrendResult, LiveFetchError>
where
    P: TrendProvider + ?Sized,
{
    let trends = provider.place_trends(&query.location_id).await?;

    let mut result = TrendResult::with_capacity(trends.len().min(query.requested_count));
    let mut collected = 0;
    for trend in trends {
        if collected >= query.requested_count {
            break;
        }
        result.insert(trend.into());
        collected += 1;
    }

    Ok(result)
}

/// Resolves a live outcome into what the caller sees.
fn settle(query: &TrendQuery, outcome: Result<TrendResult, LiveFetchError>) -> TrendResult {
    match outcome {
        Ok(result) => {
            info!(
                "Fetched {} live trends for {}",
                result.len(),
                query.location_id
            );
            result
        },
        Err(e) => {
            warn!(
                "Live trends fetch for {} failed: {}. Using fallback entry instead.",
                query.location_id, e
            );
            fallback()
        },
    }
}

/// The fixed single-entry result served for every live failure.
pub fn fallback() -> TrendResult {
    std::iter::once(TrendEntry::new(FALLBACK_NAME, FALLBACK_LINK)).collect()
}

use futures::future::join_all;
use log::debug;

use crate::{client::CurrentWeather, model::BatchResult};

/// Fan-out/join-all over a list of cities.
///
/// Every city gets its own independent `fetch_one`; all requests are started
/// together and awaited together. The batch itself cannot fail: a city's
/// failure lands in its own slot and never cancels the others. Outcome order
/// equals input order because `join_all` is index-stable, regardless of which
/// request completes first.
#[derive(Debug, Clone)]
pub struct BatchFetcher<F> {
    fetcher: F,
}

impl<F: CurrentWeather> BatchFetcher<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub async fn fetch_all(&self, cities: &[String]) -> BatchResult {
        if cities.is_empty() {
            return Vec::new();
        }

        debug!("fetching {} cities concurrently", cities.len());

        let requests = cities.iter().map(|city| self.fetcher.fetch_one(city));
        join_all(requests).await
    }
}

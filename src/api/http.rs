use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use super::{ApiError, ApiFuture, OrderApi};
use crate::config::ApiConfig;
use crate::model::{OrderDocument, OrderId, OrderSummary};

/// [`OrderApi`] over HTTP. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HttpOrderApi {
    client: Client,
    base_url: String,
}

impl HttpOrderApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Url::parse(&config.base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the single-order endpoint; the UID is escaped as one path segment
    pub fn order_url(&self, id: &OrderId) -> String {
        format!(
            "{}/api/order/{}",
            self.base_url,
            urlencoding::encode(id.as_str())
        )
    }

    pub fn recent_url(&self) -> String {
        format!("{}/api/orders/recent", self.base_url)
    }
}

impl OrderApi for HttpOrderApi {
    fn fetch_order(&self, id: &OrderId) -> ApiFuture<OrderDocument> {
        Box::pin(get_json(self.client.clone(), self.order_url(id)))
    }

    fn fetch_recent(&self) -> ApiFuture<Vec<OrderSummary>> {
        let fut = get_json::<Option<Vec<OrderSummary>>>(self.client.clone(), self.recent_url());
        // The backend encodes an empty list as `null`
        Box::pin(async move { fut.await.map(Option::unwrap_or_default) })
    }
}

async fn get_json<T: DeserializeOwned>(client: Client, url: String) -> Result<T, ApiError> {
    tracing::debug!("GET {}", url);
    let response = client.get(&url).send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        tracing::debug!("GET {} -> {}", url, status);
        return Err(ApiError::Status {
            status: status.as_u16(),
            body: body.trim_end_matches(['\r', '\n']).to_string(),
        });
    }

    Ok(serde_json::from_str(&body)?)
}

use async_trait::async_trait;
use gloo_net::http::Request;
use leptos::logging::log;

use crate::config::ApiConfig;
use crate::errors::ReviewsError;
use crate::form::FormRecord;
use crate::models::{Ack, Envelope, ItemRef, Review, SuggestRequest, SuggestResponse, VoteRequest};

/// The four calls the review panel makes against the review service.
#[async_trait(?Send)]
pub trait ReviewBackend {
    /// GET the review list of an item.
    async fn fetch_reviews(&self, item: &ItemRef) -> Result<Envelope<Vec<Review>>, ReviewsError>;

    /// POST a helpful vote. The response body is not read.
    async fn thumb_up(&self, vote: &VoteRequest) -> Result<(), ReviewsError>;

    /// POST a draft for a sentiment suggestion.
    async fn suggest(&self, draft: &SuggestRequest) -> Result<SuggestResponse, ReviewsError>;

    /// POST a new review (form record including `item_id`).
    async fn create_review(&self, record: &FormRecord) -> Result<Ack, ReviewsError>;
}

/// `ReviewBackend` over `fetch`, via gloo-net.
#[derive(Debug, Clone, Default)]
pub struct HttpBackend {
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl ReviewBackend for HttpBackend {
    async fn fetch_reviews(&self, item: &ItemRef) -> Result<Envelope<Vec<Review>>, ReviewsError> {
        let url = self.config.reviews_for(item);
        log!("[API] GET {}", url);
        let response = Request::get(&url).send().await?;
        Ok(response.json::<Envelope<Vec<Review>>>().await?)
    }

    async fn thumb_up(&self, vote: &VoteRequest) -> Result<(), ReviewsError> {
        let url = self.config.thumb_up();
        log!("[API] POST {} index={}", url, vote.index);
        Request::post(&url).json(vote)?.send().await?;
        Ok(())
    }

    async fn suggest(&self, draft: &SuggestRequest) -> Result<SuggestResponse, ReviewsError> {
        let url = self.config.suggest();
        log!("[API] POST {}", url);
        let response = Request::post(&url).json(draft)?.send().await?;
        Ok(response.json::<SuggestResponse>().await?)
    }

    async fn create_review(&self, record: &FormRecord) -> Result<Ack, ReviewsError> {
        let url = self.config.create();
        log!("[API] POST {}", url);
        let response = Request::post(&url).json(record)?.send().await?;
        Ok(response.json::<Ack>().await?)
    }
}

use async_trait::async_trait;
use reviewboard::form::FormRecord;
use reviewboard::models::{Ack, Envelope, ItemRef, Review, SuggestRequest, SuggestResponse, VoteRequest};
use reviewboard::{ReviewBackend, ReviewsError};
use std::cell::{Cell, RefCell};

/// In-memory review service that records every call.
#[derive(Default)]
pub struct MockBackend {
    pub reviews: RefCell<Vec<Review>>,
    pub list_success: Cell<bool>,
    pub fetches: Cell<usize>,
    pub votes: RefCell<Vec<VoteRequest>>,
    pub suggest_reply: RefCell<SuggestResponse>,
    pub created: RefCell<Vec<serde_json::Value>>,
    pub create_error: RefCell<Option<String>>,
}

impl MockBackend {
    pub fn with_reviews(reviews: Vec<Review>) -> Self {
        let mock = Self::default();
        *mock.reviews.borrow_mut() = reviews;
        mock.list_success.set(true);
        mock
    }
}

pub fn review(title: &str, rating: i64) -> Review {
    Review {
        title: title.to_string(),
        review_text: format!("{title} body"),
        rating,
        ..Default::default()
    }
}

#[async_trait(?Send)]
impl ReviewBackend for MockBackend {
    async fn fetch_reviews(&self, _item: &ItemRef) -> Result<Envelope<Vec<Review>>, ReviewsError> {
        self.fetches.set(self.fetches.get() + 1);
        Ok(Envelope {
            success: self.list_success.get(),
            data: Some(self.reviews.borrow().clone()),
            error: None,
        })
    }

    async fn thumb_up(&self, vote: &VoteRequest) -> Result<(), ReviewsError> {
        self.votes.borrow_mut().push(vote.clone());
        Ok(())
    }

    async fn suggest(&self, _draft: &SuggestRequest) -> Result<SuggestResponse, ReviewsError> {
        Ok(self.suggest_reply.borrow().clone())
    }

    async fn create_review(&self, record: &FormRecord) -> Result<Ack, ReviewsError> {
        self.created
            .borrow_mut()
            .push(serde_json::to_value(record).expect("record serializes"));
        let error = self.create_error.borrow().clone();
        Ok(Ack {
            success: error.is_none(),
            data: None,
            error,
        })
    }
}

/// Reactive state of one item's review panel and the operations that change it.
/// Components share a controller through `Rc` and spawn its futures on click/submit.
use std::cell::Cell;

use leptos::logging::{error, log, warn};
use leptos::*;

use crate::api::ReviewBackend;
use crate::errors::ReviewsError;
use crate::form::FormRecord;
use crate::models::{ItemRef, Review, SuggestRequest, Suggestion, VoteRequest};

/// Result of posting the new-review form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    /// Server said no; the message is what the alert shows.
    Rejected(String),
}

pub const SUBMIT_FALLBACK_ERROR: &str = "Failed";

pub struct ReviewController<B> {
    backend: B,
    item: ItemRef,
    /// `None` until the first load lands.
    pub reviews: RwSignal<Option<Vec<Review>>>,
    /// AI hint panel content; `None` keeps the panel hidden.
    pub hint: RwSignal<Option<Suggestion>>,
    load_seq: Cell<u64>,
}

impl<B: ReviewBackend> ReviewController<B> {
    pub fn new(backend: B, item: ItemRef) -> Self {
        Self {
            backend,
            item,
            reviews: create_rw_signal(None),
            hint: create_rw_signal(None),
            load_seq: Cell::new(0),
        }
    }

    pub fn item(&self) -> &ItemRef {
        &self.item
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Number shown in the count label.
    pub fn review_count(&self) -> usize {
        self.reviews.with(|list| list.as_ref().map_or(0, Vec::len))
    }

    /// Fetches the item's reviews and replaces the list. A failed envelope
    /// counts as an empty list. Returns whether the result was applied; a
    /// load overtaken by a newer one is dropped.
    pub async fn load_reviews(&self) -> Result<bool, ReviewsError> {
        let seq = self.load_seq.get() + 1;
        self.load_seq.set(seq);

        let envelope = self.backend.fetch_reviews(&self.item).await?;
        if self.load_seq.get() != seq {
            log!("[REVIEWS] Dropping stale response #{} for item {}", seq, self.item);
            return Ok(false);
        }

        let list = envelope.into_data().unwrap_or_default();
        log!("[REVIEWS] Rendering {} reviews for item {}", list.len(), self.item);
        self.reviews.set(Some(list));
        Ok(true)
    }

    /// Posts a helpful vote for the card at `index`, then reloads the list.
    pub async fn thumb_up(&self, index: usize) -> Result<(), ReviewsError> {
        let review_id = self.reviews.with_untracked(|list| {
            list.as_ref()
                .and_then(|reviews| reviews.get(index))
                .and_then(|review| review.id)
        });
        let vote = VoteRequest {
            item_id: self.item.clone(),
            index,
            review_id,
        };
        log!("[VOTE] item {} index {}", self.item, index);

        self.backend.thumb_up(&vote).await?;
        self.load_reviews().await?;
        Ok(())
    }

    /// Asks for a sentiment suggestion. On success the hint is replaced;
    /// on any failure it keeps its previous state.
    pub async fn suggest(&self, draft: SuggestRequest) -> Option<Suggestion> {
        let response = match self.backend.suggest(&draft).await {
            Ok(response) => response,
            Err(err) => {
                warn!("[AI] Suggestion request failed: {}", err);
                return None;
            }
        };

        let suggestion = Suggestion::from_response(&response);
        match suggestion {
            Some(hint) => {
                log!("[AI] {} ({})", hint.sentiment.label(), hint.percent_label());
                self.hint.set(Some(hint));
            }
            None => log!(
                "[AI] No suggestion: {}",
                response.error.as_deref().unwrap_or("unsuccessful response")
            ),
        }
        suggestion
    }

    pub fn clear_hint(&self) {
        self.hint.set(None);
    }

    /// Posts the new review. On success `on_created` runs (close the dialog,
    /// reset the form), the hint is hidden and the list reloads once.
    pub async fn submit<F>(&self, record: FormRecord, on_created: F) -> Result<SubmitOutcome, ReviewsError>
    where
        F: FnOnce(),
    {
        let record = record.with_item(&self.item);
        let ack = self.backend.create_review(&record).await?;

        if !ack.success {
            let message = ack
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| SUBMIT_FALLBACK_ERROR.to_string());
            log!("[SUBMIT] Rejected: {}", message);
            return Ok(SubmitOutcome::Rejected(message));
        }

        log!("[SUBMIT] Review created for item {}", self.item);
        on_created();
        self.clear_hint();
        // The review exists now; a failed refresh is not a failed submit.
        if let Err(err) = self.load_reviews().await {
            error!("[SUBMIT] Reload after create failed: {}", err);
        }
        Ok(SubmitOutcome::Created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ack, Envelope, SuggestResponse};
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::{join3, poll_fn};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::task::Poll;

    #[derive(Default)]
    struct MockBackend {
        reviews: RefCell<Vec<Review>>,
        list_success: Cell<bool>,
        fetches: Cell<usize>,
        votes: RefCell<Vec<VoteRequest>>,
        suggest_reply: RefCell<Option<SuggestResponse>>,
        created: RefCell<Vec<serde_json::Value>>,
        create_error: RefCell<Option<Option<String>>>,
        gated: RefCell<VecDeque<oneshot::Receiver<Vec<Review>>>>,
    }

    impl MockBackend {
        fn with_reviews(reviews: Vec<Review>) -> Self {
            let mock = Self::default();
            *mock.reviews.borrow_mut() = reviews;
            mock.list_success.set(true);
            mock
        }
    }

    #[async_trait(?Send)]
    impl ReviewBackend for MockBackend {
        async fn fetch_reviews(&self, _item: &ItemRef) -> Result<Envelope<Vec<Review>>, ReviewsError> {
            self.fetches.set(self.fetches.get() + 1);
            let gate = self.gated.borrow_mut().pop_front();
            let data = match gate {
                Some(rx) => rx.await.unwrap_or_default(),
                None => self.reviews.borrow().clone(),
            };
            Ok(Envelope {
                success: self.list_success.get(),
                data: Some(data),
                error: None,
            })
        }

        async fn thumb_up(&self, vote: &VoteRequest) -> Result<(), ReviewsError> {
            self.votes.borrow_mut().push(vote.clone());
            Ok(())
        }

        async fn suggest(&self, _draft: &SuggestRequest) -> Result<SuggestResponse, ReviewsError> {
            Ok(self.suggest_reply.borrow().clone().unwrap_or_default())
        }

        async fn create_review(&self, record: &FormRecord) -> Result<Ack, ReviewsError> {
            self.created.borrow_mut().push(serde_json::to_value(record).unwrap());
            let error = self.create_error.borrow().clone();
            Ok(Ack {
                success: error.is_none(),
                data: None,
                error: error.flatten(),
            })
        }
    }

    fn review(title: &str, id: Option<i64>) -> Review {
        Review {
            id,
            title: title.to_string(),
            rating: 4,
            ..Default::default()
        }
    }

    async fn yield_now() {
        let mut yielded = false;
        poll_fn(|cx| {
            if yielded {
                Poll::Ready(())
            } else {
                yielded = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        })
        .await
    }

    #[test]
    fn load_applies_list_and_count() {
        let runtime = create_runtime();
        let backend = MockBackend::with_reviews(vec![review("A", None), review("B", None)]);
        let controller = ReviewController::new(backend, ItemRef::from("1049"));
        assert_eq!(controller.reviews.get_untracked(), None);

        assert!(block_on(controller.load_reviews()).unwrap());
        assert_eq!(controller.review_count(), 2);
        runtime.dispose();
    }

    #[test]
    fn unsuccessful_envelope_is_empty_list() {
        let runtime = create_runtime();
        let backend = MockBackend::with_reviews(vec![review("A", None)]);
        backend.list_success.set(false);
        let controller = ReviewController::new(backend, ItemRef::from("7"));

        block_on(controller.load_reviews()).unwrap();
        assert_eq!(controller.reviews.get_untracked(), Some(vec![]));
        assert_eq!(controller.review_count(), 0);
        runtime.dispose();
    }

    #[test]
    fn vote_posts_index_and_reloads_once() {
        let runtime = create_runtime();
        let backend = MockBackend::with_reviews(vec![
            review("A", Some(10)),
            review("B", Some(11)),
            review("C", Some(12)),
        ]);
        let controller = ReviewController::new(backend, ItemRef::from("1049"));
        block_on(controller.load_reviews()).unwrap();
        let before = controller.backend().fetches.get();

        block_on(controller.thumb_up(2)).unwrap();

        let votes = controller.backend().votes.borrow().clone();
        assert_eq!(votes.len(), 1);
        assert_eq!(
            serde_json::to_value(&votes[0]).unwrap(),
            serde_json::json!({"item_id": 1049, "index": 2, "review_id": 12})
        );
        assert_eq!(controller.backend().fetches.get(), before + 1);
        runtime.dispose();
    }

    #[test]
    fn vote_before_first_load_sends_position_only() {
        let runtime = create_runtime();
        let controller = ReviewController::new(MockBackend::with_reviews(vec![]), ItemRef::from("5"));

        block_on(controller.thumb_up(0)).unwrap();
        let votes = controller.backend().votes.borrow().clone();
        assert_eq!(votes[0].review_id, None);
        assert_eq!(controller.backend().fetches.get(), 1);
        runtime.dispose();
    }

    #[test]
    fn suggestion_failure_keeps_previous_hint() {
        let runtime = create_runtime();
        let controller = ReviewController::new(MockBackend::default(), ItemRef::from("5"));
        *controller.backend().suggest_reply.borrow_mut() = Some(SuggestResponse {
            success: true,
            recommendation: true,
            confidence: 0.934,
            ..Default::default()
        });

        let hint = block_on(controller.suggest(SuggestRequest::default())).unwrap();
        assert_eq!(hint.percent, 93);
        assert_eq!(controller.hint.get_untracked(), Some(hint));

        *controller.backend().suggest_reply.borrow_mut() = Some(SuggestResponse::default());
        assert!(block_on(controller.suggest(SuggestRequest::default())).is_none());
        assert_eq!(controller.hint.get_untracked(), Some(hint));
        runtime.dispose();
    }

    #[test]
    fn successful_submit_closes_and_reloads_once() {
        let runtime = create_runtime();
        let controller = ReviewController::new(MockBackend::with_reviews(vec![]), ItemRef::from("1049"));
        controller.hint.set(Some(Suggestion {
            sentiment: crate::models::Sentiment::Positive,
            percent: 80,
            degraded: false,
        }));
        let closed = Cell::new(0);
        let record = FormRecord::from_fields([("title", "T"), ("rating", "5")]);

        let outcome = block_on(controller.submit(record, || closed.set(closed.get() + 1))).unwrap();

        assert_eq!(outcome, SubmitOutcome::Created);
        assert_eq!(closed.get(), 1);
        assert_eq!(controller.hint.get_untracked(), None);
        assert_eq!(controller.backend().fetches.get(), 1);
        let sent = controller.backend().created.borrow()[0].clone();
        assert_eq!(sent["item_id"], serde_json::json!(1049));
        assert_eq!(sent["rating"], serde_json::json!(5));
        runtime.dispose();
    }

    #[test]
    fn rejected_submit_reports_message_without_reload() {
        let runtime = create_runtime();
        let controller = ReviewController::new(MockBackend::default(), ItemRef::from("1"));

        *controller.backend().create_error.borrow_mut() = Some(Some("Title required".to_string()));
        let outcome = block_on(controller.submit(FormRecord::default(), || panic!("must not close"))).unwrap();
        assert_eq!(outcome, SubmitOutcome::Rejected("Title required".to_string()));

        *controller.backend().create_error.borrow_mut() = Some(None);
        let outcome = block_on(controller.submit(FormRecord::default(), || panic!("must not close"))).unwrap();
        assert_eq!(outcome, SubmitOutcome::Rejected(SUBMIT_FALLBACK_ERROR.to_string()));

        assert_eq!(controller.backend().fetches.get(), 0);
        runtime.dispose();
    }

    #[test]
    fn newest_load_wins_over_late_response() {
        let runtime = create_runtime();
        let backend = MockBackend::with_reviews(vec![]);
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        backend.gated.borrow_mut().extend([first_rx, second_rx]);
        let controller = ReviewController::new(backend, ItemRef::from("3"));

        let (first, second, _) = block_on(join3(
            controller.load_reviews(),
            controller.load_reviews(),
            async {
                second_tx.send(vec![review("fresh", None)]).unwrap();
                yield_now().await;
                first_tx.send(vec![review("stale", None), review("stale", None)]).unwrap();
            },
        ));

        assert!(!first.unwrap());
        assert!(second.unwrap());
        let titles: Vec<String> = controller
            .reviews
            .get_untracked()
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["fresh".to_string()]);
        runtime.dispose();
    }
}

pub mod item;
pub mod review;

pub use item::ItemRef;
pub use review::{
    Ack, Envelope, Review, Sentiment, SuggestRequest, SuggestResponse, Suggestion, VoteRequest,
};

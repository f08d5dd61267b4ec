//! HTML markup for the review list. Cards are produced as strings and the
//! list container is replaced wholesale on every load.

use crate::models::Review;

pub const MAX_STARS: i64 = 5;
pub const FILLED_STAR: char = '★';
pub const EMPTY_STAR: char = '☆';

/// Attribute carried by each `+1` control; its value is the card's position.
pub const VOTE_INDEX_ATTR: &str = "data-vote-index";

pub const EMPTY_NOTICE: &str = r#"<div class="alert alert-info">No reviews yet.</div>"#;
pub const LOADING_NOTICE: &str =
    r#"<div class="text-muted small py-2" aria-busy="true">Loading reviews…</div>"#;

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `rating` filled stars followed by the empty remainder, clamped to 0..=5.
pub fn star_strip(rating: i64) -> String {
    let filled = rating.clamp(0, MAX_STARS) as usize;
    let mut strip = String::with_capacity(MAX_STARS as usize * 3);
    strip.extend(std::iter::repeat(FILLED_STAR).take(filled));
    strip.extend(std::iter::repeat(EMPTY_STAR).take(MAX_STARS as usize - filled));
    strip
}

fn badge(recommended: bool) -> (&'static str, &'static str) {
    if recommended {
        ("bg-success", "Recommended")
    } else {
        ("bg-secondary", "Not Recommended")
    }
}

pub fn review_card(review: &Review, index: usize) -> String {
    let (badge_class, badge_label) = badge(review.recommended);
    let age = match review.age {
        Some(age) if age != 0 => age.to_string(),
        _ => "-".to_string(),
    };
    let helpful = review.positive_feedback.unwrap_or(0);
    let review_id = review
        .id
        .map(|id| format!(r#" data-review-id="{id}""#))
        .unwrap_or_default();

    format!(
        r#"<div class="card mb-2"{review_id}>
  <div class="card-body">
    <div class="d-flex justify-content-between align-items-start">
      <h6 class="mb-1">{title}</h6>
      <span class="badge {badge_class}">{badge_label}</span>
    </div>
    <div class="text-warning small mb-1">{stars}</div>
    <p class="mb-2">{body}</p>
    <div class="d-flex justify-content-between text-muted small">
      <span>Age: {age}</span>
      <span>
        Helpful: <b>{helpful}</b>
        <button type="button" class="btn btn-sm btn-link" {VOTE_INDEX_ATTR}="{index}">+1</button>
      </span>
    </div>
  </div>
</div>"#,
        title = escape_html(&review.title),
        stars = star_strip(review.rating),
        body = escape_html(&review.review_text),
    )
}

/// Markup for the whole list container: the empty-state notice or one card
/// per review, in list order.
pub fn review_list(reviews: &[Review]) -> String {
    if reviews.is_empty() {
        return EMPTY_NOTICE.to_string();
    }
    reviews
        .iter()
        .enumerate()
        .map(|(index, review)| review_card(review, index))
        .collect()
}

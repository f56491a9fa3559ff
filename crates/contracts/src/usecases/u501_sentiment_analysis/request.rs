use crate::domain::a002_product::aggregate::Review;
use serde::{Deserialize, Serialize};

/// Single-text request: `{"text": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
}

/// Batch request: `{"reviews": ["...", "..."]}`.
///
/// The service answers with one result per entry, in the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeBatchRequest {
    pub reviews: Vec<String>,
}

impl AnalyzeBatchRequest {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        Self {
            reviews: reviews.iter().map(|r| r.comment.clone()).collect(),
        }
    }
}

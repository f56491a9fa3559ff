use crate::shared::api_utils::{ApiClient, ApiError};
use contracts::domain::a002_product::aggregate::Review;
use contracts::usecases::common::{UseCaseError, UseCaseResult};
use contracts::usecases::u501_sentiment_analysis::{
    correlate, AnalyzeBatchRequest, AnalyzeTextRequest, ReviewSentiments, SentimentResult,
};

const ANALYZE_PATH: &str = "/analyze";

/// Sentiment of one review comment
pub async fn analyze_text(client: &ApiClient, text: &str) -> Result<SentimentResult, ApiError> {
    let request = AnalyzeTextRequest {
        text: text.to_string(),
    };
    client.post_json(ANALYZE_PATH, &request).await
}

/// All comments of a product in one request, mapped back to review ids
pub async fn analyze_reviews(
    client: &ApiClient,
    reviews: &[Review],
) -> UseCaseResult<ReviewSentiments> {
    if reviews.is_empty() {
        return Ok(ReviewSentiments::new());
    }
    let request = AnalyzeBatchRequest::from_reviews(reviews);
    let results: Vec<SentimentResult> = client
        .post_json(ANALYZE_PATH, &request)
        .await
        .map_err(|e| UseCaseError::external(e.to_string()).with_details(client.url(ANALYZE_PATH)))?;
    let sentiments = correlate(reviews, results).inspect_err(|e| {
        log::warn!("sentiment batch rejected: {}", e);
    })?;
    log::debug!("annotated {} reviews", sentiments.len());
    Ok(sentiments)
}

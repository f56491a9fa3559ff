//! Mapping batch sentiment results back onto reviews.
//!
//! The batch endpoint takes bare comment strings, so results carry no review
//! id. When the service echoes `index` that is used; otherwise the ordering
//! contract applies: result `i` belongs to review `i`. Either way the result
//! count must equal the review count.

use super::response::SentimentResult;
use crate::domain::a002_product::aggregate::{Review, ReviewId};
use crate::usecases::common::{UseCaseError, UseCaseResult};
use std::collections::HashMap;

pub type ReviewSentiments = HashMap<ReviewId, SentimentResult>;

pub fn correlate(reviews: &[Review], results: Vec<SentimentResult>) -> UseCaseResult<ReviewSentiments> {
    if results.len() != reviews.len() {
        return Err(UseCaseError::mismatch(format!(
            "{} reviews sent, {} results received",
            reviews.len(),
            results.len()
        )));
    }

    let echoed = results.iter().filter(|r| r.index.is_some()).count();
    if echoed == 0 {
        return Ok(reviews
            .iter()
            .map(|review| review.id)
            .zip(results)
            .collect());
    }
    if echoed != results.len() {
        return Err(UseCaseError::mismatch(
            "Some results echo an index and some do not",
        ));
    }

    let mut mapped = ReviewSentiments::with_capacity(results.len());
    for result in results {
        let Some(index) = result.index else {
            continue;
        };
        let review = reviews.get(index).ok_or_else(|| {
            UseCaseError::mismatch(format!("Result index {} is out of range", index))
        })?;
        if mapped.insert(review.id, result).is_some() {
            return Err(UseCaseError::mismatch(format!(
                "Index {} was returned twice",
                index
            )));
        }
    }
    Ok(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u501_sentiment_analysis::response::SentimentLabel;

    fn review(id: i64, comment: &str) -> Review {
        Review {
            id: ReviewId(id),
            comment: comment.into(),
            rating: 4,
        }
    }

    fn result(label: SentimentLabel, confidence: f64, index: Option<usize>) -> SentimentResult {
        SentimentResult {
            sentiment: label,
            confidence,
            index,
        }
    }

    fn reviews() -> Vec<Review> {
        vec![review(11, "Great"), review(12, "Awful"), review(13, "Fine")]
    }

    #[test]
    fn test_results_map_by_position() {
        let mapped = correlate(
            &reviews(),
            vec![
                result(SentimentLabel::Positive, 0.9, None),
                result(SentimentLabel::Negative, 0.8, None),
                result(SentimentLabel::Neutral, 0.6, None),
            ],
        )
        .unwrap();
        assert_eq!(mapped[&ReviewId(11)].sentiment, SentimentLabel::Positive);
        assert_eq!(mapped[&ReviewId(12)].sentiment, SentimentLabel::Negative);
        assert_eq!(mapped[&ReviewId(13)].sentiment, SentimentLabel::Neutral);
    }

    #[test]
    fn test_echoed_index_wins_over_position() {
        let mapped = correlate(
            &reviews(),
            vec![
                result(SentimentLabel::Neutral, 0.6, Some(2)),
                result(SentimentLabel::Positive, 0.9, Some(0)),
                result(SentimentLabel::Negative, 0.8, Some(1)),
            ],
        )
        .unwrap();
        assert_eq!(mapped[&ReviewId(11)].sentiment, SentimentLabel::Positive);
        assert_eq!(mapped[&ReviewId(13)].sentiment, SentimentLabel::Neutral);
    }

    #[test]
    fn test_count_mismatch_is_an_error() {
        let err = correlate(&reviews(), vec![result(SentimentLabel::Positive, 0.9, None)])
            .unwrap_err();
        assert_eq!(err.code, "RESPONSE_MISMATCH");
    }

    #[test]
    fn test_bad_echoes_are_errors() {
        let out_of_range = correlate(
            &reviews()[..1],
            vec![result(SentimentLabel::Positive, 0.9, Some(3))],
        );
        assert!(out_of_range.is_err());

        let duplicated = correlate(
            &reviews()[..2],
            vec![
                result(SentimentLabel::Positive, 0.9, Some(0)),
                result(SentimentLabel::Negative, 0.9, Some(0)),
            ],
        );
        assert!(duplicated.is_err());

        let mixed = correlate(
            &reviews()[..2],
            vec![
                result(SentimentLabel::Positive, 0.9, Some(0)),
                result(SentimentLabel::Negative, 0.9, None),
            ],
        );
        assert!(mixed.is_err());
    }

    #[test]
    fn test_empty_batch_is_empty_map() {
        assert!(correlate(&[], vec![]).unwrap().is_empty());
    }
}

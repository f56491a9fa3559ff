pub mod correlate;
pub mod request;
pub mod response;

pub use correlate::{correlate, ReviewSentiments};
pub use request::{AnalyzeBatchRequest, AnalyzeTextRequest};
pub use response::{SentimentLabel, SentimentResult};

pub mod common;
pub mod u501_sentiment_analysis;
pub mod u502_generate_description;

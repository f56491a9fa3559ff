use serde::{Deserialize, Serialize};

/// `POST /description/generate` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateDescriptionRequest {
    pub title: String,
}

impl GenerateDescriptionRequest {
    pub fn new(title: &str) -> Result<Self, String> {
        let title = title.trim();
        if title.is_empty() {
            return Err("Enter a product name before generating a description".into());
        }
        Ok(Self {
            title: title.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_trimmed_and_required() {
        assert_eq!(
            GenerateDescriptionRequest::new("  Desk lamp ").unwrap().title,
            "Desk lamp"
        );
        assert!(GenerateDescriptionRequest::new("   ").is_err());
    }
}

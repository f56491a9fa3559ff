use crate::shared::serde_utils::null_as_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateDescriptionResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

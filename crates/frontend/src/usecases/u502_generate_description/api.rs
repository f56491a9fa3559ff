use crate::shared::api_utils::ApiClient;
use contracts::usecases::common::{UseCaseError, UseCaseResult};
use contracts::usecases::u502_generate_description::{
    GenerateDescriptionRequest, GenerateDescriptionResponse,
};

/// Ask the description service to write copy for a product name
pub async fn generate_description(client: &ApiClient, title: &str) -> UseCaseResult<String> {
    let request = GenerateDescriptionRequest::new(title).map_err(UseCaseError::validation)?;
    let response: GenerateDescriptionResponse = client
        .post_json("/generate", &request)
        .await
        .map_err(|e| UseCaseError::external(e.to_string()))?;
    if response.description.trim().is_empty() {
        return Err(UseCaseError::mismatch("The service returned an empty description"));
    }
    Ok(response.description)
}

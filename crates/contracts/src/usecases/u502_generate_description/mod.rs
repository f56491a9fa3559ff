pub mod request;
pub mod response;

pub use request::GenerateDescriptionRequest;
pub use response::GenerateDescriptionResponse;

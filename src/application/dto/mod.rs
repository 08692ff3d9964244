/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod update_check_request;
mod update_check_response;

pub use output_format::OutputFormat;
pub use update_check_request::UpdateCheckRequest;
pub use update_check_response::{ClassificationSummary, UpdateCheckResponse};

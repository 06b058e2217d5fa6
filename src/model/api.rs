use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failed request.
///
/// `details` is only present for validation failures and carries one entry
/// per violated rule.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

use serde::Serialize;
use utoipa::ToSchema;

/// Successful envelope as documented in OpenAPI
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Error envelope as documented in OpenAPI
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code for programmatic handling
    #[schema(example = "USER_NOT_FOUND")]
    pub code: String,

    #[schema(example = "user not found")]
    pub message: String,
}

use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /reset endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct ResetResponse {
    /// Confirmation message from the backend ("History cleared").
    response: String,
}

impl SerdeJSONBodyHTTPResponseType for ResetResponse {}

impl ResetResponse {
    pub(crate) fn message(&self) -> &str { self.response.as_str() }
}

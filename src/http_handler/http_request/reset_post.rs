use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::reset::ResetResponse;

/// Request type for the /reset endpoint. Clears the conversation history
/// the backend keeps for the session, so the next prompt starts a fresh
/// site instead of refining the previous one.
#[derive(Debug)]
pub(crate) struct ResetRequest {}

impl NoBodyHTTPRequestType for ResetRequest {}

impl HTTPRequestType for ResetRequest {
    /// Type of the expected response.
    type Response = ResetResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &'static str { "/reset" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

use super::request_common::{
    HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType, RequestError,
};
use crate::http_handler::http_response::generate::GenerateResponse;

/// Request type for the /generate endpoint.
#[derive(serde::Serialize, Debug)]
pub(crate) struct GenerateRequest {
    /// The website prompt forwarded to the generation backend. Follow-up
    /// prompts refine the site generated earlier in the session, since the
    /// backend keeps the conversation history.
    prompt: String,
}

impl GenerateRequest {
    /// Builds a generate request from a user prompt. Whitespace-only
    /// prompts are rejected before any request is sent.
    pub(crate) fn new(prompt: impl Into<String>) -> Result<Self, RequestError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(RequestError::EmptyPrompt);
        }
        Ok(Self { prompt })
    }
}

impl JSONBodyHTTPRequestType for GenerateRequest {
    /// The type of the json body.
    type Body = GenerateRequest;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for GenerateRequest {
    /// Type of the expected response.
    type Response = GenerateResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &'static str { "/generate" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /generate endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct GenerateResponse {
    /// The generated site markup, ready to be rendered by a browser. The
    /// backend strips markdown code fences before responding.
    response: String,
}

impl SerdeJSONBodyHTTPResponseType for GenerateResponse {}

impl GenerateResponse {
    pub(crate) fn markup(&self) -> &str { self.response.as_str() }
}

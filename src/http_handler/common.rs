use super::http_request::request_common::RequestError;
use super::http_response::response_common::ResponseError;
use strum_macros::Display;

/// Error for a request issued through the client handle, wrapping the
/// failure of either half of the exchange.
#[derive(Debug, Display)]
pub(crate) enum HTTPError {
    #[strum(to_string = "request could not be built: {0}")]
    HTTPRequestError(RequestError),
    #[strum(to_string = "request failed: {0}")]
    HTTPResponseError(ResponseError),
}

impl std::error::Error for HTTPError {}

impl From<RequestError> for HTTPError {
    fn from(value: RequestError) -> Self { HTTPError::HTTPRequestError(value) }
}

impl From<ResponseError> for HTTPError {
    fn from(value: ResponseError) -> Self { HTTPError::HTTPResponseError(value) }
}

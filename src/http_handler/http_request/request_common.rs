use crate::http_handler::common::HTTPError;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_response::response_common::{HTTPResponseType, ResponseError};
use strum_macros::Display;

/// The HTTP verbs used against the backend.
#[derive(Debug, Clone, Copy, Display)]
pub(crate) enum HTTPRequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// Errors raised while building a request, before anything is sent.
#[derive(Debug, Display)]
pub(crate) enum RequestError {
    #[strum(to_string = "prompt is empty")]
    EmptyPrompt,
}

impl std::error::Error for RequestError {}

/// Common interface of all request types: each names its endpoint, its
/// HTTP method and the response type its reply parses into.
pub(crate) trait HTTPRequestType {
    /// Type of the expected response.
    type Response: HTTPResponseType;

    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &'static str;
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod;
    /// Additional header parameters, empty unless a request overrides it.
    fn header_params(&self) -> reqwest::header::HeaderMap {
        reqwest::header::HeaderMap::default()
    }

    /// Builds the `reqwest` request for this type against the handle's
    /// base URL, without sending it.
    fn request_builder(&self, client: &HTTPClient) -> reqwest::RequestBuilder {
        let compound_url = client.join_endpoint(self.endpoint());
        let builder = match self.request_method() {
            HTTPRequestMethod::Get => client.client().get(compound_url),
            HTTPRequestMethod::Post => client.client().post(compound_url),
            HTTPRequestMethod::Put => client.client().put(compound_url),
            HTTPRequestMethod::Delete => client.client().delete(compound_url),
        };
        builder.headers(self.header_params())
    }
}

/// Request types without a body. Provides the default send path.
pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    /// Sends the request through the given client handle and parses the
    /// reply via the associated response type.
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let response =
            self.request_builder(client).send().await.map_err(ResponseError::from)?;
        Ok(Self::Response::read_response(response).await?)
    }
}

/// Request types carrying a JSON body.
pub(crate) trait JSONBodyHTTPRequestType: HTTPRequestType {
    /// The type of the json body.
    type Body: serde::Serialize;

    /// Returns the serializable body object.
    fn body(&self) -> &Self::Body;

    /// Sends the request with its JSON body through the given client
    /// handle and parses the reply via the associated response type.
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let response = self
            .request_builder(client)
            .json(self.body())
            .send()
            .await
            .map_err(ResponseError::from)?;
        Ok(Self::Response::read_response(response).await?)
    }
}

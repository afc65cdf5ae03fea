use strum_macros::Display;

pub(crate) trait JSONBodyHTTPResponseType: HTTPResponseType {
    async fn parse_json_body(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>
    where Self::ParsedResponseType: for<'de> serde::Deserialize<'de> {
        Ok(response.json::<Self::ParsedResponseType>().await?)
    }
}

/// Marker for response types that are plain serde structs: parsing is the
/// blanket JSON body impl below, nothing endpoint-specific.
pub(crate) trait SerdeJSONBodyHTTPResponseType {}

impl<T> JSONBodyHTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    type ParsedResponseType = T;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        Self::parse_json_body(resp).await
    }
}

pub(crate) trait HTTPResponseType {
    type ParsedResponseType;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    async fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ResponseError> {
        if response.status().is_success() {
            Ok(response)
        } else if response.status().is_server_error() {
            Err(ResponseError::InternalServer)
        } else if response.status().is_client_error() {
            // The backend reports client errors as plain text or HTML
            // pages, not structured JSON.
            let status = response.status().as_u16();
            let body = response.text().await?;
            Err(ResponseError::BadRequest(RejectedRequest { status, body }))
        } else {
            Err(ResponseError::Unknown)
        }
    }
}

/// Status and raw body text of a request the backend turned down.
#[derive(Debug)]
pub(crate) struct RejectedRequest {
    status: u16,
    body: String,
}

impl RejectedRequest {
    pub(crate) fn status(&self) -> u16 { self.status }
    pub(crate) fn body(&self) -> &str { self.body.as_str() }
}

impl std::fmt::Display for RejectedRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "status {}", self.status)
    }
}

#[derive(Debug, Display)]
pub(crate) enum ResponseError {
    #[strum(to_string = "backend reported an internal error")]
    InternalServer,
    #[strum(to_string = "backend rejected the request ({0})")]
    BadRequest(RejectedRequest),
    #[strum(to_string = "backend is unreachable")]
    NoConnection,
    #[strum(to_string = "unexpected response")]
    Unknown,
}

impl std::error::Error for ResponseError {}

impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() || value.is_redirect() {
            ResponseError::InternalServer
        } else if value.is_connect() {
            ResponseError::NoConnection
        } else {
            ResponseError::Unknown
        }
    }
}

/// Rejections raised before any request leaves the process.
///
/// Validation stops at the first failing rule, so a call reports exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field: {field_name}")]
    IncompleteParams { field_name: &'static str },
    #[error("Order id is not valid")]
    InvalidOrderId,
    #[error("Payment method is not supported")]
    InvalidPaymentMethod,
    #[error("Customer name must have at most 255 characters")]
    InvalidCustomerName,
    #[error("Holder must have at most 100 characters")]
    InvalidHolder,
    #[error("Expiration date must be MM/YY or MM/YYYY")]
    InvalidExpirationDate,
    #[error("Security code must have between 1 and 4 characters")]
    InvalidSecurityCode,
    #[error("Number of payments must be between 1 and 99")]
    InvalidNumberPayments,
    #[error("Just click key is not valid")]
    InvalidJustClickKey,
    #[error("Request id is not valid")]
    InvalidRequestId,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectorError {
    #[error("Invalid request parameters: {0}")]
    InvalidParams(ValidationError),
    #[error("Failed to encode connector request")]
    RequestEncodingFailed,
    #[error("Request to the gateway failed")]
    RequestFailed,
    /// The gateway answered with a document this client does not recognize.
    /// The raw body is attached to the report as a `RawConnectorResponse`.
    #[error("Gateway returned an unrecognized response")]
    UnknownError,
}

impl ConnectorError {
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::InvalidParams(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_unknown_error(&self) -> bool {
        matches!(self, Self::UnknownError)
    }
}

impl From<ValidationError> for ConnectorError {
    fn from(error: ValidationError) -> Self {
        Self::InvalidParams(error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpClientError {
    #[error("Failed to parse url")]
    UrlParsingFailed,
    #[error("Failed to construct the http client")]
    ClientConstructionFailed,
    #[error("Header map construction failed")]
    HeaderMapConstructionFailed,
    #[error("Request timed out")]
    RequestTimeoutReceived,
    #[error("Failed to send request to the gateway: {0}")]
    RequestNotSent(String),
    #[error("Failed to read the response body")]
    ResponseDecodingFailed,
    #[error("Gateway responded with status {status_code}")]
    UnexpectedStatus { status_code: u16 },
}

impl common_utils::errors::ErrorSwitch<ConnectorError> for ValidationError {
    fn switch(&self) -> ConnectorError {
        ConnectorError::InvalidParams(self.clone())
    }
}

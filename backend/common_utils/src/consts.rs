/// Header carrying the SOAP 1.1 operation name
pub const SOAP_ACTION_HEADER: &str = "SOAPAction";

/// SOAP 1.1 envelope namespace
pub const SOAP_ENVELOPE_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Namespace of the protected card web service
pub const PROTECTED_CARD_NAMESPACE: &str = "http://www.cartaoprotegido.com.br/WebService/";

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Default timeout applied by the HTTP transport, in seconds
pub const REQUEST_TIME_OUT: u64 = 30;

/// Env var prefix used by the configuration loader
pub const ENV_PREFIX: &str = "BRASPAG";

/// Env var selecting which config file is loaded
pub const ENV_SELECTOR: &str = "BRASPAG_ENV";

/// Maximum length accepted for an order id
pub const MAX_ORDER_ID_LENGTH: usize = 50;

pub const MAX_CUSTOMER_NAME_LENGTH: usize = 255;

pub const MIN_NUMBER_PAYMENTS: i64 = 1;
pub const MAX_NUMBER_PAYMENTS: i64 = 99;

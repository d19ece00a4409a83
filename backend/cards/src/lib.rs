use std::sync::LazyLock;

use common_utils::errors::CustomResult;
use error_stack::{report, ResultExt};
use hyperswitch_masking::{PeekInterface, Secret};
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const MAX_HOLDER_NAME_LENGTH: usize = 100;
pub const MAX_SECURITY_CODE_LENGTH: usize = 4;

/// Two digit month followed by a two or four digit year
static EXPIRATION_REGEX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])/(\d{2}|\d{4})$"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardValidationError {
    #[error("card expiration must be MM/YY or MM/YYYY")]
    InvalidExpiration,
    #[error("card security code must have between 1 and 4 characters")]
    InvalidSecurityCode,
    #[error("card holder name must have at most 100 characters")]
    InvalidHolderName,
}

/// Card expiration as typed by the card holder, e.g. `10/12` or `10/2012`.
///
/// The gateway receives the original text unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardExpiration(String);

impl CardExpiration {
    pub fn new(value: &str) -> CustomResult<Self, CardValidationError> {
        let regex = EXPIRATION_REGEX
            .as_ref()
            .map_err(|_| report!(CardValidationError::InvalidExpiration))
            .attach_printable("expiration regex failed to compile")?;

        if regex.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(report!(CardValidationError::InvalidExpiration))
                .attach_printable_lazy(|| format!("unexpected expiration format: {value:?}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CardExpiration {
    type Error = CardValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value).map_err(|report| report.current_context().clone())
    }
}

impl From<CardExpiration> for String {
    fn from(value: CardExpiration) -> Self {
        value.0
    }
}

impl std::fmt::Display for CardExpiration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// CVV/CVC as sent to the gateway: one to four characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSecurityCode(Secret<String>);

impl CardSecurityCode {
    pub fn new(secret: Secret<String>) -> CustomResult<Self, CardValidationError> {
        let length = secret.peek().chars().count();

        if (1..=MAX_SECURITY_CODE_LENGTH).contains(&length) {
            Ok(Self(secret))
        } else {
            Err(report!(CardValidationError::InvalidSecurityCode))
                .attach_printable_lazy(|| format!("security code has {length} characters"))
        }
    }
}

impl PeekInterface<Secret<String>> for CardSecurityCode {
    fn peek(&self) -> &Secret<String> {
        &self.0
    }

    fn peek_mut(&mut self) -> &mut Secret<String> {
        &mut self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardHolderName(String);

impl CardHolderName {
    pub fn new(name: &str) -> CustomResult<Self, CardValidationError> {
        let length = name.chars().count();

        if length <= MAX_HOLDER_NAME_LENGTH {
            Ok(Self(name.to_string()))
        } else {
            Err(report!(CardValidationError::InvalidHolderName))
                .attach_printable_lazy(|| format!("holder name has {length} characters"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

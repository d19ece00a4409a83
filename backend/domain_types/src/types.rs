use hyperswitch_masking::Secret;
use serde::{Deserialize, Serialize};

pub const HOMOLOGATION_BRASPAG_URL: &str = "https://homologacao.pagador.com.br";
pub const PRODUCTION_BRASPAG_URL: &str = "https://transaction.pagador.com.br";
pub const HOMOLOGATION_PROTECTED_CARD_URL: &str = "https://cartaoprotegido.braspag.com.br";
pub const PRODUCTION_PROTECTED_CARD_URL: &str = "https://www.cartaoprotegido.com.br";

/// Merchant-assigned order identifier. Numeric ids are carried in their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "OrderIdRepr", into = "String")]
pub struct OrderId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum OrderIdRepr {
    Text(String),
    Number(u64),
}

impl From<OrderIdRepr> for OrderId {
    fn from(value: OrderIdRepr) -> Self {
        match value {
            OrderIdRepr::Text(text) => Self(text),
            OrderIdRepr::Number(number) => Self(number.to_string()),
        }
    }
}

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<OrderId> for String {
    fn from(value: OrderId) -> Self {
        value.0
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for OrderId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for OrderId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Acquirer routes accepted by the gateway, identified by the gateway's numeric code.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentMethod {
    // Brazil
    #[serde(rename = "amex_2p")]
    #[strum(serialize = "amex_2p")]
    Amex2p,
    CieloNoauthVisa,
    CieloPreauthVisa,
    CieloNoauthMastercard,
    CieloPreauthMastercard,
    CieloNoauthElo,
    CieloNoauthDiners,
    Redecard,
    RedecardPreauth,
    CieloSitef,
    HipercardSitef,
    HipercardMoip,
    OiPaggo,
    AmexSitef,
    AuraDtef,
    RedecardSitef,
    // Mexico
    #[serde(rename = "mex_amex_2p")]
    #[strum(serialize = "mex_amex_2p")]
    MexAmex2p,
    MexBanorteVisa,
    MexBanorteDiners,
    MexBanorteMastercard,
    // Colombia
    ColVisa,
    ColAmex,
    ColDiners,
    // International
    PaypalExpress,
    /// Simulated acquirer available only in homologation
    Braspag,
}

impl PaymentMethod {
    pub fn code(&self) -> u16 {
        match self {
            Self::Amex2p => 18,
            Self::CieloNoauthVisa => 71,
            Self::CieloPreauthVisa => 73,
            Self::CieloNoauthMastercard => 120,
            Self::CieloPreauthMastercard => 122,
            Self::CieloNoauthElo => 126,
            Self::CieloNoauthDiners => 130,
            Self::Redecard => 20,
            Self::RedecardPreauth => 42,
            Self::CieloSitef => 57,
            Self::HipercardSitef => 62,
            Self::HipercardMoip => 90,
            Self::OiPaggo => 55,
            Self::AmexSitef => 58,
            Self::AuraDtef => 37,
            Self::RedecardSitef => 44,
            Self::MexAmex2p => 45,
            Self::MexBanorteVisa => 50,
            Self::MexBanorteDiners => 52,
            Self::MexBanorteMastercard => 53,
            Self::ColVisa => 63,
            Self::ColAmex => 65,
            Self::ColDiners => 66,
            Self::PaypalExpress => 35,
            Self::Braspag => 997,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GatewayEnvironment {
    #[default]
    Homologation,
    Production,
}

/// Merchant credentials and gateway hosts for one process. Read-only once built.
#[derive(Debug, Clone)]
pub struct EnvironmentContext {
    pub merchant_id: Secret<String>,
    pub environment: GatewayEnvironment,
    pub braspag_url: String,
    pub protected_card_url: String,
}

impl EnvironmentContext {
    /// Context pointing at the default hosts of `environment`
    pub fn new(merchant_id: Secret<String>, environment: GatewayEnvironment) -> Self {
        let (braspag_url, protected_card_url) = match environment {
            GatewayEnvironment::Homologation => {
                (HOMOLOGATION_BRASPAG_URL, HOMOLOGATION_PROTECTED_CARD_URL)
            }
            GatewayEnvironment::Production => {
                (PRODUCTION_BRASPAG_URL, PRODUCTION_PROTECTED_CARD_URL)
            }
        };
        Self {
            merchant_id,
            environment,
            braspag_url: braspag_url.to_string(),
            protected_card_url: protected_card_url.to_string(),
        }
    }

    pub fn with_braspag_url(mut self, url: impl Into<String>) -> Self {
        self.braspag_url = trim_trailing_slash(url.into());
        self
    }

    pub fn with_protected_card_url(mut self, url: impl Into<String>) -> Self {
        self.protected_card_url = trim_trailing_slash(url.into());
        self
    }

    pub fn is_production(&self) -> bool {
        self.environment == GatewayEnvironment::Production
    }

    pub fn is_homologation(&self) -> bool {
        self.environment == GatewayEnvironment::Homologation
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

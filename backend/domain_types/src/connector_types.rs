use cards::{CardExpiration, CardHolderName, CardSecurityCode};
use hyperswitch_masking::Secret;
use serde::{Deserialize, Serialize};

use crate::types::{OrderId, PaymentMethod};

/// Raw gateway payload kept on error reports for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawConnectorResponse(pub String);

impl std::fmt::Display for RawConnectorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Card operation parameters as supplied by the caller, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentParams {
    pub order_id: Option<OrderId>,
    pub customer_name: Option<String>,
    pub amount: Option<String>,
    pub payment_method: Option<String>,
    pub holder: Option<String>,
    pub card_number: Option<Secret<String>>,
    pub expiration: Option<String>,
    pub security_code: Option<Secret<String>>,
    pub number_payments: Option<i64>,
    #[serde(rename = "type")]
    pub transaction_type: Option<i32>,
}

/// A card authorization that passed every validation rule.
///
/// Built by the connector's parameter check; the request builder only accepts this type.
#[derive(Debug, Clone)]
pub struct PaymentRequest {
    pub order_id: OrderId,
    pub customer_name: String,
    pub amount: String,
    pub payment_method: PaymentMethod,
    pub holder: CardHolderName,
    pub card_number: Secret<String>,
    pub expiration: CardExpiration,
    pub security_code: CardSecurityCode,
    pub number_payments: u8,
    pub transaction_type: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProtectedCardParams {
    pub customer_name: Option<String>,
    pub holder: Option<String>,
    pub card_number: Option<Secret<String>>,
    pub expiration: Option<String>,
    pub order_id: Option<OrderId>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ProtectedCardRequest {
    pub customer_name: String,
    pub holder: CardHolderName,
    pub card_number: Secret<String>,
    pub expiration: CardExpiration,
    pub order_id: Option<OrderId>,
    pub request_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JustClickShopParams {
    pub request_id: Option<String>,
    pub customer_name: Option<String>,
    pub order_id: Option<OrderId>,
    pub amount: Option<f64>,
    pub payment_method: Option<String>,
    pub number_installments: Option<i64>,
    pub payment_type: Option<String>,
    pub just_click_key: Option<String>,
    pub security_code: Option<Secret<String>>,
}

#[derive(Debug, Clone)]
pub struct JustClickShopRequest {
    pub request_id: String,
    pub customer_name: String,
    pub order_id: OrderId,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub number_installments: u8,
    pub payment_type: String,
    pub just_click_key: String,
    pub security_code: CardSecurityCode,
}

/// Result of authorize, capture and void.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardTransactionResponse {
    pub amount: Option<String>,
    pub message: Option<String>,
    pub number: Option<String>,
    pub return_code: Option<String>,
    pub status: Option<String>,
    pub transaction_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardInfoResponse {
    pub checking_number: Option<String>,
    pub certified: Option<String>,
    pub autorization_number: Option<String>,
    pub card_number: Option<String>,
    pub transaction_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SaveProtectedCardResponse {
    pub just_click_key: Option<String>,
    pub success: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProtectedCardResponse {
    pub holder: Option<String>,
    pub expiration: Option<String>,
    pub card_number: Option<String>,
    pub masked_card_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JustClickShopResponse {
    pub success: Option<bool>,
    pub correlation_id: Option<String>,
    pub authorization_code: Option<String>,
    pub amount: Option<String>,
    pub braspag_transaction_id: Option<String>,
    pub acquirer_transaction_id: Option<String>,
    pub proof_of_sale: Option<String>,
    pub return_code: Option<String>,
    pub return_message: Option<String>,
    pub status: Option<String>,
}

use hyperswitch_masking::Secret;
use serde::Serialize;

/// Form body of `Pagador.asmx/Authorize`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BraspagAuthorizeRequest {
    pub merchant_id: Secret<String>,
    pub order_id: String,
    pub customer_name: String,
    pub amount: String,
    pub payment_method: u16,
    pub holder: String,
    pub card_number: Secret<String>,
    pub expiration: String,
    pub security_code: Secret<String>,
    pub number_payments: u8,
    pub type_payment: i32,
}

/// Form body of `Pagador.asmx/Capture` and `Pagador.asmx/VoidTransaction`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BraspagOrderRequest {
    pub merchant_id: Secret<String>,
    pub order_id: String,
}

/// Form body of `pedido.asmx/GetDadosCartao`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BraspagCardInfoRequest {
    pub loja: Secret<String>,
    pub numero_pedido: String,
}

/// Form body of `CartaoProtegido.asmx/GetCreditCard`
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BraspagGetCreditCardRequest {
    pub merchant_key: Secret<String>,
    pub just_click_key: String,
}

#[derive(Debug, Serialize)]
pub struct SaveCreditCard {
    #[serde(rename = "@xmlns")]
    pub xmlns: &'static str,
    #[serde(rename = "saveCreditCardRequestWS")]
    pub request: SaveCreditCardRequestWs,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SaveCreditCardRequestWs {
    pub request_id: String,
    pub merchant_key: Secret<String>,
    pub customer_name: String,
    pub card_holder: String,
    pub card_number: Secret<String>,
    pub card_expiration: String,
}

#[derive(Debug, Serialize)]
pub struct JustClickShop {
    #[serde(rename = "@xmlns")]
    pub xmlns: &'static str,
    #[serde(rename = "justClickShopRequestWS")]
    pub request: JustClickShopRequestWs,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct JustClickShopRequestWs {
    pub request_id: String,
    pub merchant_key: Secret<String>,
    pub customer_name: String,
    pub order_id: String,
    pub amount: f64,
    pub payment_method: u16,
    pub payment_type: String,
    pub number_installments: u8,
    pub just_click_key: String,
    pub security_code: Secret<String>,
}

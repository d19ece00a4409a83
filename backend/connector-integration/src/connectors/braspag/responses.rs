use serde::Deserialize;

/// Reply of the Pagador card transaction endpoints
#[derive(Debug, Deserialize)]
pub struct PagadorReturn {
    pub amount: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "authorisationNumber")]
    pub authorisation_number: Option<String>,
    #[serde(rename = "returnCode")]
    pub return_code: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "transactionId")]
    pub transaction_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DadosCartao {
    pub numero_comprovante: Option<String>,
    pub autenticada: Option<String>,
    pub numero_autorizacao: Option<String>,
    pub numero_cartao: Option<String>,
    pub numero_transacao: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CartaoProtegidoReturn {
    pub card_holder: Option<String>,
    pub card_number: Option<String>,
    pub card_expiration: Option<String>,
    pub masked_card_number: Option<String>,
}

// SOAP replies, read after namespace prefixes were stripped

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SoapEnvelope<T> {
    pub body: T,
}

#[derive(Debug, Deserialize)]
pub struct SoapFault {
    pub faultcode: Option<String>,
    pub faultstring: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SaveCreditCardBody {
    pub save_credit_card_response: Option<SaveCreditCardResponse>,
    pub fault: Option<SoapFault>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SaveCreditCardResponse {
    pub save_credit_card_result: Option<SaveCreditCardResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SaveCreditCardResult {
    pub success: Option<bool>,
    pub just_click_key: Option<String>,
    pub correlation_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JustClickShopBody {
    pub just_click_shop_response: Option<JustClickShopSoapResponse>,
    pub fault: Option<SoapFault>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JustClickShopSoapResponse {
    pub just_click_shop_result: Option<JustClickShopResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JustClickShopResult {
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

use std::sync::LazyLock;

use cards::{CardExpiration, CardHolderName, CardSecurityCode};
use common_utils::{
    consts,
    errors::CustomResult,
    ext_traits::{StringExt, XmlExt},
};
use domain_types::{
    connector_types::{
        CardInfoResponse, CardTransactionResponse, JustClickShopParams, JustClickShopRequest,
        JustClickShopResponse, PaymentParams, PaymentRequest, ProtectedCardParams,
        ProtectedCardRequest, ProtectedCardResponse, RawConnectorResponse,
        SaveProtectedCardResponse,
    },
    errors::{ConnectorError, ValidationError},
    router_response_types::Response,
    types::{EnvironmentContext, OrderId, PaymentMethod},
};
use error_stack::{report, ResultExt};
use hyperswitch_masking::PeekInterface;
use interfaces::verification::ReferenceValidator;
use regex::Regex;
use serde::de::DeserializeOwned;

use super::{requests, responses};
use crate::utils;

static UUID_REGEX: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9]{8}-[a-z0-9]{4}-[a-z0-9]{4}-[a-z0-9]{4}-[a-z0-9]{12}$")
});

/// Reference formats accepted by the Braspag services
#[derive(Debug, Clone, Copy, Default)]
pub struct BraspagReferenceValidator;

impl ReferenceValidator for BraspagReferenceValidator {
    fn is_valid_order_id(&self, order_id: &str) -> bool {
        (1..=consts::MAX_ORDER_ID_LENGTH).contains(&order_id.chars().count())
    }

    fn is_valid_just_click_key(&self, just_click_key: &str) -> bool {
        is_uuid(just_click_key)
    }

    fn is_valid_request_id(&self, request_id: &str) -> bool {
        is_uuid(request_id)
    }
}

fn is_uuid(value: &str) -> bool {
    match UUID_REGEX.as_ref() {
        Ok(regex) => regex.is_match(value),
        Err(error) => {
            tracing::error!(?error, "uuid regex failed to compile");
            false
        }
    }
}

/// Pairs a validated request with the merchant context it is sent under.
pub struct BraspagRouterData<'a, T> {
    pub context: &'a EnvironmentContext,
    pub router_data: T,
}

impl<'a, T> From<(&'a EnvironmentContext, T)> for BraspagRouterData<'a, T> {
    fn from((context, router_data): (&'a EnvironmentContext, T)) -> Self {
        Self {
            context,
            router_data,
        }
    }
}

fn required<'a, T>(
    value: &'a Option<T>,
    field_name: &'static str,
) -> CustomResult<&'a T, ValidationError> {
    value
        .as_ref()
        .ok_or_else(|| report!(ValidationError::IncompleteParams { field_name }))
}

pub fn validate_order_id(
    order_id: &OrderId,
    validator: &dyn ReferenceValidator,
) -> CustomResult<(), ValidationError> {
    if validator.is_valid_order_id(order_id.as_str()) {
        Ok(())
    } else {
        Err(report!(ValidationError::InvalidOrderId))
            .attach_printable_lazy(|| format!("rejected order id {order_id}"))
    }
}

pub fn validate_just_click_key(
    just_click_key: &str,
    validator: &dyn ReferenceValidator,
) -> CustomResult<(), ValidationError> {
    if validator.is_valid_just_click_key(just_click_key) {
        Ok(())
    } else {
        Err(report!(ValidationError::InvalidJustClickKey))
    }
}

fn validate_request_id(
    request_id: &str,
    validator: &dyn ReferenceValidator,
) -> CustomResult<(), ValidationError> {
    if validator.is_valid_request_id(request_id) {
        Ok(())
    } else {
        Err(report!(ValidationError::InvalidRequestId))
    }
}

fn parse_payment_method(payment_method: &str) -> CustomResult<PaymentMethod, ValidationError> {
    payment_method
        .to_string()
        .parse_enum("PaymentMethod")
        .change_context(ValidationError::InvalidPaymentMethod)
}

fn validate_customer_name(customer_name: &str) -> CustomResult<(), ValidationError> {
    if customer_name.chars().count() > consts::MAX_CUSTOMER_NAME_LENGTH {
        Err(report!(ValidationError::InvalidCustomerName))
    } else {
        Ok(())
    }
}

fn parse_installments(number: i64) -> CustomResult<u8, ValidationError> {
    if !(consts::MIN_NUMBER_PAYMENTS..=consts::MAX_NUMBER_PAYMENTS).contains(&number) {
        return Err(report!(ValidationError::InvalidNumberPayments))
            .attach_printable_lazy(|| format!("received {number} payments"));
    }
    u8::try_from(number).change_context(ValidationError::InvalidNumberPayments)
}

/// Checks a card authorization, stopping at the first rule that fails.
///
/// Presence of every field is checked before any format rule, so a call
/// missing the order id and carrying a bad expiration reports the missing field.
pub fn check_params(
    params: &PaymentParams,
    validator: &dyn ReferenceValidator,
) -> CustomResult<PaymentRequest, ValidationError> {
    let order_id = required(&params.order_id, "order_id")?;
    let amount = required(&params.amount, "amount")?;
    let payment_method = required(&params.payment_method, "payment_method")?;
    let customer_name = required(&params.customer_name, "customer_name")?;
    let holder = required(&params.holder, "holder")?;
    let card_number = required(&params.card_number, "card_number")?;
    let expiration = required(&params.expiration, "expiration")?;
    let security_code = required(&params.security_code, "security_code")?;
    let number_payments = required(&params.number_payments, "number_payments")?;
    let transaction_type = required(&params.transaction_type, "type")?;

    validate_order_id(order_id, validator)?;
    let payment_method = parse_payment_method(payment_method)?;
    validate_customer_name(customer_name)?;
    let holder = CardHolderName::new(holder).change_context(ValidationError::InvalidHolder)?;
    let expiration =
        CardExpiration::new(expiration).change_context(ValidationError::InvalidExpirationDate)?;
    let security_code = CardSecurityCode::new(security_code.clone())
        .change_context(ValidationError::InvalidSecurityCode)?;
    let number_payments = parse_installments(*number_payments)?;

    Ok(PaymentRequest {
        order_id: order_id.clone(),
        customer_name: customer_name.clone(),
        amount: amount.clone(),
        payment_method,
        holder,
        card_number: card_number.clone(),
        expiration,
        security_code,
        number_payments,
        transaction_type: *transaction_type,
    })
}

pub fn check_protected_card_params(
    params: &ProtectedCardParams,
    validator: &dyn ReferenceValidator,
) -> CustomResult<ProtectedCardRequest, ValidationError> {
    let customer_name = required(&params.customer_name, "customer_name")?;
    let holder = required(&params.holder, "holder")?;
    let card_number = required(&params.card_number, "card_number")?;
    let expiration = required(&params.expiration, "expiration")?;
    let request_id = required(&params.request_id, "request_id")?;

    if let Some(order_id) = &params.order_id {
        validate_order_id(order_id, validator)?;
    }
    validate_request_id(request_id, validator)?;
    let holder = CardHolderName::new(holder).change_context(ValidationError::InvalidHolder)?;
    if holder.is_empty() {
        return Err(report!(ValidationError::InvalidHolder));
    }
    validate_customer_name(customer_name)?;
    let expiration =
        CardExpiration::new(expiration).change_context(ValidationError::InvalidExpirationDate)?;

    Ok(ProtectedCardRequest {
        customer_name: customer_name.clone(),
        holder,
        card_number: card_number.clone(),
        expiration,
        order_id: params.order_id.clone(),
        request_id: request_id.clone(),
    })
}

pub fn check_just_click_shop_params(
    params: &JustClickShopParams,
    validator: &dyn ReferenceValidator,
) -> CustomResult<JustClickShopRequest, ValidationError> {
    let request_id = required(&params.request_id, "request_id")?;
    let customer_name = required(&params.customer_name, "customer_name")?;
    let order_id = required(&params.order_id, "order_id")?;
    let amount = required(&params.amount, "amount")?;
    let payment_method = required(&params.payment_method, "payment_method")?;
    let number_installments = required(&params.number_installments, "number_installments")?;
    let payment_type = required(&params.payment_type, "payment_type")?;
    let just_click_key = required(&params.just_click_key, "just_click_key")?;
    let security_code = required(&params.security_code, "security_code")?;

    validate_order_id(order_id, validator)?;
    let payment_method = parse_payment_method(payment_method)?;
    let security_code = CardSecurityCode::new(security_code.clone())
        .change_context(ValidationError::InvalidSecurityCode)?;
    let number_installments = parse_installments(*number_installments)?;

    Ok(JustClickShopRequest {
        request_id: request_id.clone(),
        customer_name: customer_name.clone(),
        order_id: order_id.clone(),
        amount: *amount,
        payment_method,
        number_installments,
        payment_type: payment_type.clone(),
        just_click_key: just_click_key.clone(),
        security_code,
    })
}

impl From<BraspagRouterData<'_, &PaymentRequest>> for requests::BraspagAuthorizeRequest {
    fn from(item: BraspagRouterData<'_, &PaymentRequest>) -> Self {
        let payment = item.router_data;
        Self {
            merchant_id: item.context.merchant_id.clone(),
            order_id: payment.order_id.to_string(),
            customer_name: payment.customer_name.clone(),
            amount: payment.amount.clone(),
            payment_method: payment.payment_method.code(),
            holder: payment.holder.as_str().to_string(),
            card_number: payment.card_number.clone(),
            expiration: payment.expiration.as_str().to_string(),
            security_code: payment.security_code.peek().clone(),
            number_payments: payment.number_payments,
            type_payment: payment.transaction_type,
        }
    }
}

impl From<BraspagRouterData<'_, &OrderId>> for requests::BraspagOrderRequest {
    fn from(item: BraspagRouterData<'_, &OrderId>) -> Self {
        Self {
            merchant_id: item.context.merchant_id.clone(),
            order_id: item.router_data.to_string(),
        }
    }
}

impl From<BraspagRouterData<'_, &OrderId>> for requests::BraspagCardInfoRequest {
    fn from(item: BraspagRouterData<'_, &OrderId>) -> Self {
        Self {
            loja: item.context.merchant_id.clone(),
            numero_pedido: item.router_data.to_string(),
        }
    }
}

impl From<BraspagRouterData<'_, &str>> for requests::BraspagGetCreditCardRequest {
    fn from(item: BraspagRouterData<'_, &str>) -> Self {
        Self {
            merchant_key: item.context.merchant_id.clone(),
            just_click_key: item.router_data.to_string(),
        }
    }
}

impl From<BraspagRouterData<'_, &ProtectedCardRequest>> for requests::SaveCreditCard {
    fn from(item: BraspagRouterData<'_, &ProtectedCardRequest>) -> Self {
        let card = item.router_data;
        Self {
            xmlns: consts::PROTECTED_CARD_NAMESPACE,
            request: requests::SaveCreditCardRequestWs {
                request_id: card.request_id.clone(),
                merchant_key: item.context.merchant_id.clone(),
                customer_name: card.customer_name.clone(),
                card_holder: card.holder.as_str().to_string(),
                card_number: card.card_number.clone(),
                card_expiration: card.expiration.as_str().to_string(),
            },
        }
    }
}

impl From<BraspagRouterData<'_, &JustClickShopRequest>> for requests::JustClickShop {
    fn from(item: BraspagRouterData<'_, &JustClickShopRequest>) -> Self {
        let purchase = item.router_data;
        Self {
            xmlns: consts::PROTECTED_CARD_NAMESPACE,
            request: requests::JustClickShopRequestWs {
                request_id: purchase.request_id.clone(),
                merchant_key: item.context.merchant_id.clone(),
                customer_name: purchase.customer_name.clone(),
                order_id: purchase.order_id.to_string(),
                amount: purchase.amount,
                payment_method: purchase.payment_method.code(),
                payment_type: purchase.payment_type.clone(),
                number_installments: purchase.number_installments,
                just_click_key: purchase.just_click_key.clone(),
                security_code: purchase.security_code.peek().clone(),
            },
        }
    }
}

impl From<responses::PagadorReturn> for CardTransactionResponse {
    fn from(response: responses::PagadorReturn) -> Self {
        Self {
            amount: response.amount,
            message: response.message,
            number: response.authorisation_number,
            return_code: response.return_code,
            status: response.status,
            transaction_id: response.transaction_id,
        }
    }
}

impl From<responses::DadosCartao> for CardInfoResponse {
    fn from(response: responses::DadosCartao) -> Self {
        Self {
            checking_number: response.numero_comprovante,
            certified: response.autenticada,
            autorization_number: response.numero_autorizacao,
            card_number: response.numero_cartao,
            transaction_number: response.numero_transacao,
        }
    }
}

impl From<responses::CartaoProtegidoReturn> for ProtectedCardResponse {
    fn from(response: responses::CartaoProtegidoReturn) -> Self {
        Self {
            holder: response.card_holder,
            expiration: response.card_expiration,
            card_number: response.card_number,
            masked_card_number: response.masked_card_number,
        }
    }
}

impl From<responses::SaveCreditCardResult> for SaveProtectedCardResponse {
    fn from(result: responses::SaveCreditCardResult) -> Self {
        Self {
            // a nil key comes back as an empty element
            just_click_key: result.just_click_key.filter(|key| !key.trim().is_empty()),
            success: result.success.unwrap_or(false),
        }
    }
}

impl From<responses::JustClickShopResult> for JustClickShopResponse {
    fn from(result: responses::JustClickShopResult) -> Self {
        Self {
            success: result.success,
            correlation_id: result.correlation_id,
            authorization_code: result.authorization_code,
            amount: result.amount,
            braspag_transaction_id: result.braspag_transaction_id,
            acquirer_transaction_id: result.acquirer_transaction_id,
            proof_of_sale: result.proof_of_sale,
            return_code: result.return_code,
            return_message: result.return_message,
            status: result.status,
        }
    }
}

fn unknown_response(raw: &str) -> error_stack::Report<ConnectorError> {
    report!(ConnectorError::UnknownError).attach(RawConnectorResponse(raw.to_string()))
}

/// Reads `response` as a document whose root element must be `expected_root`.
///
/// Any other root, a payload without elements, or a body that does not fit `T`
/// becomes `UnknownError` carrying the raw payload.
fn parse_document<T: DeserializeOwned>(
    response: &Response,
    expected_root: &str,
) -> CustomResult<T, ConnectorError> {
    let raw = response.body_text();
    let document = utils::strip_xml_namespaces(raw.trim_start_matches('\u{FEFF}').trim())
        .change_context(ConnectorError::UnknownError)
        .attach(RawConnectorResponse(raw.clone()))?;
    match utils::root_element_name(&document) {
        Some(root) if root == expected_root => document
            .as_str()
            .parse_xml::<T>()
            .change_context(ConnectorError::UnknownError)
            .attach(RawConnectorResponse(raw.clone())),
        root => Err(unknown_response(&raw)).attach_printable_lazy(|| {
            format!("expected root element {expected_root}, found {root:?}")
        }),
    }
}

fn soap_fault(fault: &responses::SoapFault) -> String {
    format!(
        "soap fault {}: {}",
        fault.faultcode.as_deref().unwrap_or_default(),
        fault.faultstring.as_deref().unwrap_or_default()
    )
}

pub fn normalize_card_transaction_response(
    response: &Response,
) -> CustomResult<CardTransactionResponse, ConnectorError> {
    parse_document::<responses::PagadorReturn>(response, "PagadorReturn")
        .map(CardTransactionResponse::from)
}

pub fn normalize_card_info_response(
    response: &Response,
) -> CustomResult<CardInfoResponse, ConnectorError> {
    parse_document::<responses::DadosCartao>(response, "DadosCartao").map(CardInfoResponse::from)
}

pub fn normalize_protected_card_response(
    response: &Response,
) -> CustomResult<ProtectedCardResponse, ConnectorError> {
    parse_document::<responses::CartaoProtegidoReturn>(response, "CartaoProtegidoReturn")
        .map(ProtectedCardResponse::from)
}

pub fn normalize_save_protected_card_response(
    response: &Response,
) -> CustomResult<SaveProtectedCardResponse, ConnectorError> {
    let envelope = parse_document::<responses::SoapEnvelope<responses::SaveCreditCardBody>>(
        response, "Envelope",
    )?;
    if let Some(fault) = envelope.body.fault {
        return Err(unknown_response(&response.body_text())).attach_printable(soap_fault(&fault));
    }
    envelope
        .body
        .save_credit_card_response
        .and_then(|body| body.save_credit_card_result)
        .map(SaveProtectedCardResponse::from)
        .ok_or_else(|| unknown_response(&response.body_text()))
        .attach_printable("missing SaveCreditCardResult")
}

pub fn normalize_just_click_shop_response(
    response: &Response,
) -> CustomResult<JustClickShopResponse, ConnectorError> {
    let envelope = parse_document::<responses::SoapEnvelope<responses::JustClickShopBody>>(
        response, "Envelope",
    )?;
    if let Some(fault) = envelope.body.fault {
        return Err(unknown_response(&response.body_text())).attach_printable(soap_fault(&fault));
    }
    Ok(envelope
        .body
        .just_click_shop_response
        .and_then(|body| body.just_click_shop_result)
        .map(JustClickShopResponse::from)
        .unwrap_or_default())
}

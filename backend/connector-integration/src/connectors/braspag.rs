pub mod endpoints;
pub mod requests;
pub mod responses;
pub mod transformers;

#[cfg(test)]
mod test;

use std::fmt::Debug;

use common_utils::{
    consts,
    errors::{CustomResult, ReportSwitchExt},
    ext_traits::Encode,
    request::{Method, Request, RequestBuilder, RequestContent},
};
use domain_types::{
    connector_flow::GatewayOperation,
    connector_types::{
        CardInfoResponse, CardTransactionResponse, JustClickShopParams, JustClickShopResponse,
        PaymentParams, ProtectedCardParams, ProtectedCardResponse, SaveProtectedCardResponse,
    },
    errors::{ConnectorError, ValidationError},
    router_response_types::Response,
    types::{EnvironmentContext, OrderId},
};
use error_stack::ResultExt;
use interfaces::{
    api::{ConnectorTransport, EndpointResolver},
    verification::ReferenceValidator,
};
use serde::Serialize;
use tracing::instrument;

pub use self::{endpoints::BraspagEndpoints, transformers::BraspagReferenceValidator};
use self::transformers::BraspagRouterData;
use crate::utils;

/// Collaborators every operation goes through.
#[derive(Clone, Copy)]
pub struct ConnectorDependencies<'a> {
    pub transport: &'a dyn ConnectorTransport,
    pub endpoints: &'a dyn EndpointResolver,
    pub validator: &'a dyn ReferenceValidator,
}

impl<'a> ConnectorDependencies<'a> {
    pub fn new(
        transport: &'a dyn ConnectorTransport,
        endpoints: &'a dyn EndpointResolver,
        validator: &'a dyn ReferenceValidator,
    ) -> Self {
        Self {
            transport,
            endpoints,
            validator,
        }
    }

    /// Braspag endpoints and reference formats over the given transport
    pub fn with_defaults(transport: &'a dyn ConnectorTransport) -> Self {
        Self::new(transport, &BraspagEndpoints, &BraspagReferenceValidator)
    }
}

impl Debug for ConnectorDependencies<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectorDependencies").finish_non_exhaustive()
    }
}

fn form_request<T: Serialize + Debug>(
    url: &str,
    body: &T,
) -> CustomResult<Request, ConnectorError> {
    let form = body
        .url_encode()
        .change_context(ConnectorError::RequestEncodingFailed)?;
    Ok(RequestBuilder::new()
        .method(Method::Post)
        .url(url)
        .attach_default_headers()
        .set_body(RequestContent::FormUrlEncoded(form))
        .build())
}

fn soap_request<T: Serialize + Debug>(
    wsdl_url: &str,
    action: &str,
    body: &T,
) -> CustomResult<Request, ConnectorError> {
    let service_url = utils::soap_service_url(wsdl_url)?;
    let payload = body
        .encode_to_xml_with_root(action)
        .change_context(ConnectorError::RequestEncodingFailed)?;
    Ok(RequestBuilder::new()
        .method(Method::Post)
        .url(&service_url)
        .attach_default_headers()
        .header(consts::SOAP_ACTION_HEADER, &utils::soap_action(action))
        .set_body(RequestContent::Xml(utils::wrap_in_soap_envelope(&payload)))
        .build())
}

fn reject_invalid<T>(
    result: CustomResult<T, ValidationError>,
    message: &'static str,
) -> CustomResult<T, ConnectorError> {
    result
        .inspect_err(|error| tracing::warn!(error = %error.current_context(), "{message}"))
        .switch()
}

async fn execute(
    transport: &dyn ConnectorTransport,
    request: Request,
) -> CustomResult<Response, ConnectorError> {
    tracing::info!(url = %request.url, method = %request.method, "sending request to braspag");
    let response = transport
        .send(request)
        .await
        .change_context(ConnectorError::RequestFailed)?;
    tracing::info!(status_code = response.status_code, "received response from braspag");
    Ok(response)
}

/// Card transactions on the Pagador service: authorize, capture, void and card info.
#[derive(Debug, Clone, Copy)]
pub struct CreditCard<'a> {
    context: &'a EnvironmentContext,
    dependencies: ConnectorDependencies<'a>,
}

impl<'a> CreditCard<'a> {
    pub fn new(context: &'a EnvironmentContext, dependencies: ConnectorDependencies<'a>) -> Self {
        Self {
            context,
            dependencies,
        }
    }

    #[instrument(skip_all, fields(operation = %GatewayOperation::Authorize))]
    pub async fn authorize(
        &self,
        params: &PaymentParams,
    ) -> CustomResult<CardTransactionResponse, ConnectorError> {
        let payment = reject_invalid(
            transformers::check_params(params, self.dependencies.validator),
            "rejected authorization",
        )?;
        let url = self
            .dependencies
            .endpoints
            .resolve(GatewayOperation::Authorize, self.context);
        let body =
            requests::BraspagAuthorizeRequest::from(BraspagRouterData::from((self.context, &payment)));
        let response = execute(self.dependencies.transport, form_request(&url, &body)?).await?;
        transformers::normalize_card_transaction_response(&response)
    }

    #[instrument(skip_all, fields(operation = %GatewayOperation::Capture, order_id = %order_id))]
    pub async fn capture(
        &self,
        order_id: &OrderId,
    ) -> CustomResult<CardTransactionResponse, ConnectorError> {
        self.order_operation(GatewayOperation::Capture, order_id).await
    }

    #[instrument(skip_all, fields(operation = %GatewayOperation::VoidTransaction, order_id = %order_id))]
    pub async fn void(
        &self,
        order_id: &OrderId,
    ) -> CustomResult<CardTransactionResponse, ConnectorError> {
        self.order_operation(GatewayOperation::VoidTransaction, order_id)
            .await
    }

    #[instrument(skip_all, fields(operation = %GatewayOperation::Info, order_id = %order_id))]
    pub async fn info(&self, order_id: &OrderId) -> CustomResult<CardInfoResponse, ConnectorError> {
        reject_invalid(
            transformers::validate_order_id(order_id, self.dependencies.validator),
            "rejected order id",
        )?;
        let url = self
            .dependencies
            .endpoints
            .resolve(GatewayOperation::Info, self.context);
        let body =
            requests::BraspagCardInfoRequest::from(BraspagRouterData::from((self.context, order_id)));
        let response = execute(self.dependencies.transport, form_request(&url, &body)?).await?;
        transformers::normalize_card_info_response(&response)
    }

    async fn order_operation(
        &self,
        operation: GatewayOperation,
        order_id: &OrderId,
    ) -> CustomResult<CardTransactionResponse, ConnectorError> {
        reject_invalid(
            transformers::validate_order_id(order_id, self.dependencies.validator),
            "rejected order id",
        )?;
        let url = self.dependencies.endpoints.resolve(operation, self.context);
        let body =
            requests::BraspagOrderRequest::from(BraspagRouterData::from((self.context, order_id)));
        let response = execute(self.dependencies.transport, form_request(&url, &body)?).await?;
        transformers::normalize_card_transaction_response(&response)
    }
}

/// Card tokenization on the Cartão Protegido service.
#[derive(Debug, Clone, Copy)]
pub struct ProtectedCreditCard<'a> {
    context: &'a EnvironmentContext,
    dependencies: ConnectorDependencies<'a>,
}

impl<'a> ProtectedCreditCard<'a> {
    pub fn new(context: &'a EnvironmentContext, dependencies: ConnectorDependencies<'a>) -> Self {
        Self {
            context,
            dependencies,
        }
    }

    /// Stores a card and returns the just click key that references it.
    /// `success: false` is returned as is.
    #[instrument(skip_all, fields(operation = %GatewayOperation::SaveProtectedCard))]
    pub async fn save(
        &self,
        params: &ProtectedCardParams,
    ) -> CustomResult<SaveProtectedCardResponse, ConnectorError> {
        let card = reject_invalid(
            transformers::check_protected_card_params(params, self.dependencies.validator),
            "rejected protected card",
        )?;
        let url = self
            .dependencies
            .endpoints
            .resolve(GatewayOperation::SaveProtectedCard, self.context);
        let body = requests::SaveCreditCard::from(BraspagRouterData::from((self.context, &card)));
        let request = soap_request(&url, "SaveCreditCard", &body)?;
        let response = execute(self.dependencies.transport, request).await?;
        transformers::normalize_save_protected_card_response(&response)
    }

    #[instrument(skip_all, fields(operation = %GatewayOperation::GetProtectedCard))]
    pub async fn get(
        &self,
        just_click_key: &str,
    ) -> CustomResult<ProtectedCardResponse, ConnectorError> {
        reject_invalid(
            transformers::validate_just_click_key(just_click_key, self.dependencies.validator),
            "rejected just click key",
        )?;
        let url = self
            .dependencies
            .endpoints
            .resolve(GatewayOperation::GetProtectedCard, self.context);
        let body = requests::BraspagGetCreditCardRequest::from(BraspagRouterData::from((
            self.context,
            just_click_key,
        )));
        let response = execute(self.dependencies.transport, form_request(&url, &body)?).await?;
        transformers::normalize_protected_card_response(&response)
    }

    /// Charges a stored card referenced by its just click key.
    #[instrument(skip_all, fields(operation = %GatewayOperation::JustClickShop))]
    pub async fn just_click_shop(
        &self,
        params: &JustClickShopParams,
    ) -> CustomResult<JustClickShopResponse, ConnectorError> {
        let purchase = reject_invalid(
            transformers::check_just_click_shop_params(params, self.dependencies.validator),
            "rejected just click shop",
        )?;
        let url = self
            .dependencies
            .endpoints
            .resolve(GatewayOperation::JustClickShop, self.context);
        let body =
            requests::JustClickShop::from(BraspagRouterData::from((self.context, &purchase)));
        let request = soap_request(&url, "JustClickShop", &body)?;
        let response = execute(self.dependencies.transport, request).await?;
        transformers::normalize_just_click_shop_response(&response)
    }
}

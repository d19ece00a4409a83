use domain_types::{connector_flow::GatewayOperation, types::EnvironmentContext};
use interfaces::api::EndpointResolver;

const PAGADOR_SERVICE_PATH: &str = "/webservices/pagador/Pagador.asmx";
const HOMOLOGATION_ORDER_SERVICE_PATH: &str = "/pagador/webservice/pedido.asmx";
const PRODUCTION_ORDER_SERVICE_PATH: &str = "/webservices/pagador/pedido.asmx";
const PROTECTED_CARD_SERVICE_PATH: &str = "/CartaoProtegido.asmx";

/// Endpoint layout of the Braspag Pagador and Cartão Protegido services.
#[derive(Debug, Clone, Copy, Default)]
pub struct BraspagEndpoints;

impl EndpointResolver for BraspagEndpoints {
    fn resolve(&self, operation: GatewayOperation, context: &EnvironmentContext) -> String {
        let braspag_url = &context.braspag_url;
        let protected_card_url = &context.protected_card_url;
        match operation {
            GatewayOperation::Authorize => format!("{braspag_url}{PAGADOR_SERVICE_PATH}/Authorize"),
            GatewayOperation::Capture => format!("{braspag_url}{PAGADOR_SERVICE_PATH}/Capture"),
            GatewayOperation::VoidTransaction => {
                format!("{braspag_url}{PAGADOR_SERVICE_PATH}/VoidTransaction")
            }
            GatewayOperation::Info => {
                let path = if context.is_production() {
                    PRODUCTION_ORDER_SERVICE_PATH
                } else {
                    HOMOLOGATION_ORDER_SERVICE_PATH
                };
                format!("{braspag_url}{path}/GetDadosCartao")
            }
            GatewayOperation::SaveProtectedCard | GatewayOperation::JustClickShop => {
                format!("{protected_card_url}{PROTECTED_CARD_SERVICE_PATH}?wsdl")
            }
            GatewayOperation::GetProtectedCard => {
                format!("{protected_card_url}{PROTECTED_CARD_SERVICE_PATH}/GetCreditCard")
            }
        }
    }
}

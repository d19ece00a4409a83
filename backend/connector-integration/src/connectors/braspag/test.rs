#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use std::sync::Mutex;

    use common_utils::{consts, errors::CustomResult, request::Request};
    use domain_types::{
        connector_flow::GatewayOperation,
        connector_types::{
            JustClickShopParams, PaymentParams, ProtectedCardParams, RawConnectorResponse,
        },
        errors::{ConnectorError, HttpClientError, ValidationError},
        router_response_types::Response,
        types::{EnvironmentContext, GatewayEnvironment, OrderId},
    };
    use error_stack::{report, Report};
    use hyperswitch_masking::Secret;
    use interfaces::{
        api::{ConnectorTransport, EndpointResolver},
        verification::ReferenceValidator,
    };

    use crate::connectors::braspag::{
        BraspagEndpoints, BraspagReferenceValidator, ConnectorDependencies, CreditCard,
        ProtectedCreditCard,
    };

    const JUST_CLICK_KEY: &str = "b0b0b0b0-bbbb-4d4d-bd27-f1f1f1ededed";

    /// Records every request and answers with a canned body.
    struct FakeTransport {
        body: Option<String>,
        requests: Mutex<Vec<Request>>,
    }

    impl FakeTransport {
        fn replying(body: &str) -> Self {
            Self {
                body: Some(body.to_string()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn unreachable() -> Self {
            Self {
                body: None,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn last_request(&self) -> Request {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }

        fn last_body(&self) -> String {
            self.last_request()
                .body
                .and_then(|body| body.as_str().map(str::to_string))
                .unwrap()
        }
    }

    #[async_trait::async_trait]
    impl ConnectorTransport for FakeTransport {
        async fn send(&self, request: Request) -> CustomResult<Response, HttpClientError> {
            self.requests.lock().unwrap().push(request);
            match &self.body {
                Some(body) => Ok(Response::new(200, body.clone())),
                None => Err(report!(HttpClientError::RequestNotSent(
                    "connection refused".to_string()
                ))),
            }
        }
    }

    struct RejectingValidator;

    impl ReferenceValidator for RejectingValidator {
        fn is_valid_order_id(&self, _order_id: &str) -> bool {
            false
        }

        fn is_valid_just_click_key(&self, _just_click_key: &str) -> bool {
            false
        }

        fn is_valid_request_id(&self, _request_id: &str) -> bool {
            false
        }
    }

    fn homologation() -> EnvironmentContext {
        EnvironmentContext::new(
            Secret::new("um id qualquer".to_string()),
            GatewayEnvironment::Homologation,
        )
    }

    fn production() -> EnvironmentContext {
        EnvironmentContext::new(
            Secret::new("um id qualquer".to_string()),
            GatewayEnvironment::Production,
        )
    }

    fn payment_params() -> PaymentParams {
        PaymentParams {
            order_id: Some(OrderId::from("xxxxx")),
            customer_name: Some("W".to_string()),
            amount: Some("100.00".to_string()),
            payment_method: Some("redecard".to_string()),
            holder: Some("Joao Maria Souza".to_string()),
            card_number: Some(Secret::new("9".repeat(10))),
            expiration: Some("10/12".to_string()),
            security_code: Some(Secret::new("123".to_string())),
            number_payments: Some(1),
            transaction_type: Some(0),
        }
    }

    fn protected_card_params() -> ProtectedCardParams {
        ProtectedCardParams {
            customer_name: Some("W".to_string()),
            holder: Some("Joao Maria Souza".to_string()),
            card_number: Some(Secret::new("9".repeat(10))),
            expiration: Some("10/12".to_string()),
            order_id: Some(OrderId::from("um order id")),
            request_id: Some("00000000-0000-0000-0000-000000000044".to_string()),
        }
    }

    fn just_click_shop_params() -> JustClickShopParams {
        JustClickShopParams {
            request_id: Some("123".to_string()),
            customer_name: Some("Joao Silva".to_string()),
            order_id: Some(OrderId::from("999")),
            amount: Some(10.50),
            payment_method: Some("redecard".to_string()),
            number_installments: Some(3),
            payment_type: Some("test".to_string()),
            just_click_key: Some(JUST_CLICK_KEY.to_string()),
            security_code: Some(Secret::new("123".to_string())),
        }
    }

    fn validation_error(report: &Report<ConnectorError>) -> ValidationError {
        report
            .current_context()
            .validation()
            .cloned()
            .expect("expected a validation error")
    }

    const AUTHORIZE_RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<PagadorReturn xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns="https://www.pagador.com.br/webservice/pagador">
  <amount>5</amount>
  <message>Transaction Successful</message>
  <authorisationNumber>733610</authorisationNumber>
  <returnCode>7</returnCode>
  <status>2</status>
  <transactionId>0</transactionId>
</PagadorReturn>"#;

    const CAPTURE_RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<PagadorReturn xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns="https://www.pagador.com.br/webservice/pagador">
  <amount>2</amount>
  <message>Approved</message>
  <returnCode>0</returnCode>
  <status>0</status>
</PagadorReturn>"#;

    const INFO_RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<DadosCartao xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns="http://www.pagador.com.br/">
  <NumeroComprovante></NumeroComprovante>
  <Autenticada>false</Autenticada>
  <NumeroAutorizacao>557593</NumeroAutorizacao>
  <NumeroCartao>345678*****0007</NumeroCartao>
  <NumeroTransacao>101001225645</NumeroTransacao>
</DadosCartao>"#;

    const SAVE_SUCCESS_RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema">
  <soap:Body>
    <SaveCreditCardResponse xmlns="http://www.cartaoprotegido.com.br/WebService/">
      <SaveCreditCardResult>
        <Success>true</Success>
        <CorrelationId>00000000-0000-0000-0000-000000000044</CorrelationId>
        <JustClickKey>b0b0b0b0-bbbb-4d4d-bd27-f1f1f1ededed</JustClickKey>
      </SaveCreditCardResult>
    </SaveCreditCardResponse>
  </soap:Body>
</soap:Envelope>"#;

    const SAVE_FAILURE_RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema">
  <soap:Body>
    <SaveCreditCardResponse xmlns="http://www.cartaoprotegido.com.br/WebService/">
      <SaveCreditCardResult>
        <Success>false</Success>
      </SaveCreditCardResult>
    </SaveCreditCardResponse>
  </soap:Body>
</soap:Envelope>"#;

    const SAVE_NIL_KEY_RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema">
  <soap:Header>
    <Trace xmlns="http://www.cartaoprotegido.com.br/WebService/">abc</Trace>
  </soap:Header>
  <soap:Body>
    <SaveCreditCardResponse xmlns="http://www.cartaoprotegido.com.br/WebService/">
      <SaveCreditCardResult>
        <Success>false</Success>
        <CorrelationId>00000000-0000-0000-0000-000000000044</CorrelationId>
        <JustClickKey xsi:nil="true" />
      </SaveCreditCardResult>
    </SaveCreditCardResponse>
  </soap:Body>
</soap:Envelope>"#;

    const SAVE_WITHOUT_RESULT_RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
    <SaveCreditCardResponse xmlns="http://www.cartaoprotegido.com.br/WebService/" />
  </soap:Body>
</soap:Envelope>"#;

    const SOAP_FAULT_RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
    <soap:Fault>
      <faultcode>soap:Server</faultcode>
      <faultstring>Server was unable to process request.</faultstring>
    </soap:Fault>
  </soap:Body>
</soap:Envelope>"#;

    const GET_RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<CartaoProtegidoReturn xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns="http://www.pagador.com.br/">
  <CardHolder>Joao Maria Souza</CardHolder>
  <CardNumber>9999999999</CardNumber>
  <CardExpiration>10/12</CardExpiration>
  <MaskedCardNumber>******9999</MaskedCardNumber>
</CartaoProtegidoReturn>"#;

    const JUST_CLICK_SHOP_RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
    <JustClickShopResponse xmlns="http://www.cartaoprotegido.com.br/WebService/">
      <JustClickShopResult>
        <Success>true</Success>
        <CorrelationId>123</CorrelationId>
        <AuthorizationCode>20130308104422</AuthorizationCode>
        <Amount>1050</Amount>
        <BraspagTransactionId>1ff114b4-32bb-4fe2-b1f2-ef79822ad5e1</BraspagTransactionId>
        <ReturnCode>4</ReturnCode>
        <ReturnMessage>Operation Successful</ReturnMessage>
        <Status>0</Status>
      </JustClickShopResult>
    </JustClickShopResponse>
  </soap:Body>
</soap:Envelope>"#;

    #[test]
    fn test_card_endpoints_share_path_across_environments() {
        let homologation = homologation();
        let production = production();
        for (operation, method) in [
            (GatewayOperation::Authorize, "Authorize"),
            (GatewayOperation::Capture, "Capture"),
            (GatewayOperation::VoidTransaction, "VoidTransaction"),
        ] {
            assert_eq!(
                BraspagEndpoints.resolve(operation, &homologation),
                format!("https://homologacao.pagador.com.br/webservices/pagador/Pagador.asmx/{method}")
            );
            assert_eq!(
                BraspagEndpoints.resolve(operation, &production),
                format!("https://transaction.pagador.com.br/webservices/pagador/Pagador.asmx/{method}")
            );
        }
    }

    #[test]
    fn test_info_endpoint_differs_per_environment() {
        assert_eq!(
            BraspagEndpoints.resolve(GatewayOperation::Info, &homologation()),
            "https://homologacao.pagador.com.br/pagador/webservice/pedido.asmx/GetDadosCartao"
        );
        assert_eq!(
            BraspagEndpoints.resolve(GatewayOperation::Info, &production()),
            "https://transaction.pagador.com.br/webservices/pagador/pedido.asmx/GetDadosCartao"
        );
    }

    #[test]
    fn test_protected_card_endpoints() {
        let context = homologation().with_protected_card_url("https://sandbox.example/");
        assert_eq!(
            BraspagEndpoints.resolve(GatewayOperation::SaveProtectedCard, &context),
            "https://sandbox.example/CartaoProtegido.asmx?wsdl"
        );
        assert_eq!(
            BraspagEndpoints.resolve(GatewayOperation::JustClickShop, &context),
            "https://sandbox.example/CartaoProtegido.asmx?wsdl"
        );
        assert_eq!(
            BraspagEndpoints.resolve(GatewayOperation::GetProtectedCard, &context),
            "https://sandbox.example/CartaoProtegido.asmx/GetCreditCard"
        );
    }

    #[test]
    fn test_every_operation_targets_its_api_host() {
        let context = production();
        let braspag = context.braspag_url.as_str();
        let protected_card = context.protected_card_url.as_str();
        for (operation, host) in [
            (GatewayOperation::Authorize, braspag),
            (GatewayOperation::Capture, braspag),
            (GatewayOperation::VoidTransaction, braspag),
            (GatewayOperation::Info, braspag),
            (GatewayOperation::SaveProtectedCard, protected_card),
            (GatewayOperation::GetProtectedCard, protected_card),
            (GatewayOperation::JustClickShop, protected_card),
        ] {
            assert!(BraspagEndpoints
                .resolve(operation, &context)
                .starts_with(&format!("{host}/")));
        }
    }

    #[test]
    fn test_reference_validator_formats() {
        let validator = BraspagReferenceValidator;
        assert!(validator.is_valid_order_id("1"));
        assert!(validator.is_valid_order_id(&"x".repeat(50)));
        assert!(!validator.is_valid_order_id(""));
        assert!(!validator.is_valid_order_id(&"x".repeat(51)));

        assert!(validator.is_valid_just_click_key(JUST_CLICK_KEY));
        assert!(validator.is_valid_just_click_key(&JUST_CLICK_KEY.to_uppercase()));
        assert!(!validator.is_valid_just_click_key("bla"));
        assert!(!validator.is_valid_just_click_key("b0b0b0b0bbbb4d4dbd27f1f1f1ededed"));
    }

    #[tokio::test]
    async fn test_authorize_requires_every_field() {
        let clear: [(&'static str, fn(&mut PaymentParams)); 10] = [
            ("order_id", |params| params.order_id = None),
            ("amount", |params| params.amount = None),
            ("payment_method", |params| params.payment_method = None),
            ("customer_name", |params| params.customer_name = None),
            ("holder", |params| params.holder = None),
            ("card_number", |params| params.card_number = None),
            ("expiration", |params| params.expiration = None),
            ("security_code", |params| params.security_code = None),
            ("number_payments", |params| params.number_payments = None),
            ("type", |params| params.transaction_type = None),
        ];
        let transport = FakeTransport::replying(AUTHORIZE_RESPONSE);
        let context = homologation();
        let credit_card = CreditCard::new(&context, ConnectorDependencies::with_defaults(&transport));

        for (field_name, clear_field) in clear {
            let mut params = payment_params();
            clear_field(&mut params);
            let error = credit_card.authorize(&params).await.unwrap_err();
            assert_eq!(
                validation_error(&error),
                ValidationError::IncompleteParams { field_name }
            );
        }
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_authorize_rejects_order_id_from_predicate() {
        let transport = FakeTransport::replying(AUTHORIZE_RESPONSE);
        let context = homologation();
        let dependencies =
            ConnectorDependencies::new(&transport, &BraspagEndpoints, &RejectingValidator);
        let mut params = payment_params();
        params.payment_method = Some("invalid".to_string());

        let error = CreditCard::new(&context, dependencies)
            .authorize(&params)
            .await
            .unwrap_err();
        assert_eq!(validation_error(&error), ValidationError::InvalidOrderId);
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_authorize_field_rules() {
        let cases: &[(fn(&mut PaymentParams), Option<ValidationError>)] = &[
            (
                |params| params.payment_method = Some("invalid".to_string()),
                Some(ValidationError::InvalidPaymentMethod),
            ),
            (
                |params| params.customer_name = Some("A".repeat(256)),
                Some(ValidationError::InvalidCustomerName),
            ),
            (|params| params.customer_name = Some("A".repeat(255)), None),
            (
                |params| params.holder = Some("A".repeat(101)),
                Some(ValidationError::InvalidHolder),
            ),
            (|params| params.holder = Some("A".repeat(100)), None),
            (
                |params| params.expiration = Some("2011/19/19".to_string()),
                Some(ValidationError::InvalidExpirationDate),
            ),
            (|params| params.expiration = Some("12/2012".to_string()), None),
            (|params| params.expiration = Some("12/12".to_string()), None),
            (
                |params| params.security_code = Some(Secret::new(String::new())),
                Some(ValidationError::InvalidSecurityCode),
            ),
            (
                |params| params.security_code = Some(Secret::new("12345".to_string())),
                Some(ValidationError::InvalidSecurityCode),
            ),
            (|params| params.security_code = Some(Secret::new("1".to_string())), None),
            (|params| params.security_code = Some(Secret::new("1234".to_string())), None),
            (
                |params| params.number_payments = Some(0),
                Some(ValidationError::InvalidNumberPayments),
            ),
            (
                |params| params.number_payments = Some(100),
                Some(ValidationError::InvalidNumberPayments),
            ),
            (|params| params.number_payments = Some(99), None),
        ];
        let context = homologation();

        for (change, expected) in cases.iter().cloned() {
            let transport = FakeTransport::replying(AUTHORIZE_RESPONSE);
            let credit_card =
                CreditCard::new(&context, ConnectorDependencies::with_defaults(&transport));
            let mut params = payment_params();
            change(&mut params);
            let result = credit_card.authorize(&params).await;
            match expected {
                Some(expected) => {
                    assert_eq!(validation_error(&result.unwrap_err()), expected);
                    assert_eq!(transport.calls(), 0);
                }
                None => {
                    assert!(result.is_ok());
                    assert_eq!(transport.calls(), 1);
                }
            }
        }
    }

    #[tokio::test]
    async fn test_authorize_normalizes_response() {
        let transport = FakeTransport::replying(AUTHORIZE_RESPONSE);
        let context = homologation();
        let response = CreditCard::new(&context, ConnectorDependencies::with_defaults(&transport))
            .authorize(&payment_params())
            .await
            .unwrap();

        assert_eq!(response.amount.as_deref(), Some("5"));
        assert_eq!(response.message.as_deref(), Some("Transaction Successful"));
        assert_eq!(response.number.as_deref(), Some("733610"));
        assert_eq!(response.return_code.as_deref(), Some("7"));
        assert_eq!(response.status.as_deref(), Some("2"));
        assert_eq!(response.transaction_id.as_deref(), Some("0"));
    }

    #[tokio::test]
    async fn test_authorize_posts_gateway_form() {
        let transport = FakeTransport::replying(AUTHORIZE_RESPONSE);
        let context = homologation();
        CreditCard::new(&context, ConnectorDependencies::with_defaults(&transport))
            .authorize(&payment_params())
            .await
            .unwrap();

        let request = transport.last_request();
        assert_eq!(
            request.url,
            "https://homologacao.pagador.com.br/webservices/pagador/Pagador.asmx/Authorize"
        );
        let body = transport.last_body();
        assert!(body.starts_with("merchantId=um+id+qualquer&orderId=xxxxx"));
        assert!(body.contains("paymentMethod=20"));
        assert!(body.contains("expiration=10%2F12"));
        assert!(body.contains("numberPayments=1"));
        assert!(body.contains("typePayment=0"));
    }

    #[tokio::test]
    async fn test_capture_and_void_tolerate_missing_children() {
        let transport = FakeTransport::replying(CAPTURE_RESPONSE);
        let context = homologation();
        let credit_card = CreditCard::new(&context, ConnectorDependencies::with_defaults(&transport));
        let order_id = OrderId::from("123456");

        let captured = credit_card.capture(&order_id).await.unwrap();
        assert_eq!(captured.amount.as_deref(), Some("2"));
        assert_eq!(captured.message.as_deref(), Some("Approved"));
        assert_eq!(captured.number, None);
        assert_eq!(captured.transaction_id, None);
        assert_eq!(transport.last_body(), "merchantId=um+id+qualquer&orderId=123456");
        assert!(transport.last_request().url.ends_with("/Pagador.asmx/Capture"));

        let voided = credit_card.void(&order_id).await.unwrap();
        assert_eq!(voided, captured);
        assert!(transport.last_request().url.ends_with("/Pagador.asmx/VoidTransaction"));
    }

    #[tokio::test]
    async fn test_capture_and_void_check_order_id_first() {
        let transport = FakeTransport::replying(CAPTURE_RESPONSE);
        let context = homologation();
        let credit_card = CreditCard::new(&context, ConnectorDependencies::with_defaults(&transport));
        let order_id = OrderId::from("x".repeat(51));

        let error = credit_card.capture(&order_id).await.unwrap_err();
        assert_eq!(validation_error(&error), ValidationError::InvalidOrderId);
        let error = credit_card.void(&order_id).await.unwrap_err();
        assert_eq!(validation_error(&error), ValidationError::InvalidOrderId);
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_info_accepts_empty_checking_number() {
        let transport = FakeTransport::replying(INFO_RESPONSE);
        let context = production();
        let info = CreditCard::new(&context, ConnectorDependencies::with_defaults(&transport))
            .info(&OrderId::from(12345_u64))
            .await
            .unwrap();

        assert_eq!(info.checking_number.as_deref(), Some(""));
        assert_eq!(info.certified.as_deref(), Some("false"));
        assert_eq!(info.autorization_number.as_deref(), Some("557593"));
        assert_eq!(info.card_number.as_deref(), Some("345678*****0007"));
        assert_eq!(info.transaction_number.as_deref(), Some("101001225645"));
        assert_eq!(transport.last_body(), "loja=um+id+qualquer&numeroPedido=12345");
    }

    #[tokio::test]
    async fn test_info_without_root_is_unknown_error() {
        let body = r#"<?xml version="1.0" encoding="utf-8"?><Erro>pedido inexistente</Erro>"#;
        let transport = FakeTransport::replying(body);
        let context = homologation();
        let error = CreditCard::new(&context, ConnectorDependencies::with_defaults(&transport))
            .info(&OrderId::from("12345"))
            .await
            .unwrap_err();

        assert!(error.current_context().is_unknown_error());
        assert_eq!(
            error.downcast_ref::<RawConnectorResponse>(),
            Some(&RawConnectorResponse(body.to_string()))
        );
    }

    #[tokio::test]
    async fn test_unparsable_body_is_unknown_error() {
        let transport = FakeTransport::replying("Service Unavailable");
        let context = homologation();
        let error = CreditCard::new(&context, ConnectorDependencies::with_defaults(&transport))
            .capture(&OrderId::from("12345"))
            .await
            .unwrap_err();
        assert!(error.current_context().is_unknown_error());
    }

    #[tokio::test]
    async fn test_transport_failure_is_request_failed() {
        let transport = FakeTransport::unreachable();
        let context = homologation();
        let error = CreditCard::new(&context, ConnectorDependencies::with_defaults(&transport))
            .capture(&OrderId::from("12345"))
            .await
            .unwrap_err();

        assert_eq!(error.current_context(), &ConnectorError::RequestFailed);
        assert!(error.downcast_ref::<HttpClientError>().is_some());
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_save_builds_soap_call() {
        let transport = FakeTransport::replying(SAVE_SUCCESS_RESPONSE);
        let context = homologation();
        let response =
            ProtectedCreditCard::new(&context, ConnectorDependencies::with_defaults(&transport))
                .save(&protected_card_params())
                .await
                .unwrap();

        assert!(response.success);
        assert_eq!(response.just_click_key.as_deref(), Some(JUST_CLICK_KEY));

        let request = transport.last_request();
        assert_eq!(
            request.url,
            "https://cartaoprotegido.braspag.com.br/CartaoProtegido.asmx"
        );
        assert_eq!(
            request.header_value(consts::SOAP_ACTION_HEADER).as_deref(),
            Some("\"http://www.cartaoprotegido.com.br/WebService/SaveCreditCard\"")
        );
        let body = transport.last_body();
        assert!(body.contains("<soap:Body><SaveCreditCard xmlns=\"http://www.cartaoprotegido.com.br/WebService/\"><saveCreditCardRequestWS>"));
        assert!(body.contains("<RequestId>00000000-0000-0000-0000-000000000044</RequestId>"));
        assert!(body.contains("<MerchantKey>um id qualquer</MerchantKey>"));
        assert!(body.contains("<CustomerName>W</CustomerName>"));
        assert!(body.contains("<CardHolder>Joao Maria Souza</CardHolder>"));
        assert!(body.contains("<CardNumber>9999999999</CardNumber>"));
        assert!(body.contains("<CardExpiration>10/12</CardExpiration>"));
    }

    #[tokio::test]
    async fn test_save_failure_is_a_result() {
        let transport = FakeTransport::replying(SAVE_FAILURE_RESPONSE);
        let context = homologation();
        let response =
            ProtectedCreditCard::new(&context, ConnectorDependencies::with_defaults(&transport))
                .save(&protected_card_params())
                .await
                .unwrap();

        assert!(!response.success);
        assert_eq!(response.just_click_key, None);
    }

    #[tokio::test]
    async fn test_save_nil_key_under_soap_header() {
        let transport = FakeTransport::replying(SAVE_NIL_KEY_RESPONSE);
        let context = homologation();
        let response =
            ProtectedCreditCard::new(&context, ConnectorDependencies::with_defaults(&transport))
                .save(&protected_card_params())
                .await
                .unwrap();

        assert!(!response.success);
        assert_eq!(response.just_click_key, None);
    }

    #[tokio::test]
    async fn test_save_without_result_is_unknown_error() {
        let transport = FakeTransport::replying(SAVE_WITHOUT_RESULT_RESPONSE);
        let context = homologation();
        let error =
            ProtectedCreditCard::new(&context, ConnectorDependencies::with_defaults(&transport))
                .save(&protected_card_params())
                .await
                .unwrap_err();

        assert!(error.current_context().is_unknown_error());
        assert_eq!(
            error.downcast_ref::<RawConnectorResponse>().map(|raw| raw.0.as_str()),
            Some(SAVE_WITHOUT_RESULT_RESPONSE)
        );
    }

    #[tokio::test]
    async fn test_save_soap_fault_is_unknown_error() {
        let transport = FakeTransport::replying(SOAP_FAULT_RESPONSE);
        let context = homologation();
        let error =
            ProtectedCreditCard::new(&context, ConnectorDependencies::with_defaults(&transport))
                .save(&protected_card_params())
                .await
                .unwrap_err();
        assert!(error.current_context().is_unknown_error());
    }

    #[tokio::test]
    async fn test_save_validates_card_fields() {
        let cases: &[(fn(&mut ProtectedCardParams), ValidationError)] = &[
            (
                |params| params.holder = None,
                ValidationError::IncompleteParams {
                    field_name: "holder",
                },
            ),
            (
                |params| params.expiration = None,
                ValidationError::IncompleteParams {
                    field_name: "expiration",
                },
            ),
            (
                |params| params.request_id = None,
                ValidationError::IncompleteParams {
                    field_name: "request_id",
                },
            ),
            (
                |params| params.order_id = Some(OrderId::from("")),
                ValidationError::InvalidOrderId,
            ),
            (
                |params| params.request_id = Some("not-a-uuid".to_string()),
                ValidationError::InvalidRequestId,
            ),
            (
                |params| params.request_id = Some(String::new()),
                ValidationError::InvalidRequestId,
            ),
            (
                |params| params.holder = Some(String::new()),
                ValidationError::InvalidHolder,
            ),
            (
                |params| params.holder = Some("A".repeat(101)),
                ValidationError::InvalidHolder,
            ),
            (
                |params| params.expiration = Some("1012".to_string()),
                ValidationError::InvalidExpirationDate,
            ),
        ];
        let transport = FakeTransport::replying(SAVE_SUCCESS_RESPONSE);
        let context = homologation();
        let protected_card =
            ProtectedCreditCard::new(&context, ConnectorDependencies::with_defaults(&transport));

        for (change, expected) in cases.iter().cloned() {
            let mut params = protected_card_params();
            change(&mut params);
            let error = protected_card.save(&params).await.unwrap_err();
            assert_eq!(validation_error(&error), expected);
        }
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_get_rejects_invalid_just_click_key() {
        let transport = FakeTransport::replying(GET_RESPONSE);
        let context = homologation();
        let error =
            ProtectedCreditCard::new(&context, ConnectorDependencies::with_defaults(&transport))
                .get("bla")
                .await
                .unwrap_err();

        assert_eq!(validation_error(&error), ValidationError::InvalidJustClickKey);
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_get_returns_card() {
        let transport = FakeTransport::replying(GET_RESPONSE);
        let context = homologation();
        let card =
            ProtectedCreditCard::new(&context, ConnectorDependencies::with_defaults(&transport))
                .get(JUST_CLICK_KEY)
                .await
                .unwrap();

        assert_eq!(card.holder.as_deref(), Some("Joao Maria Souza"));
        assert_eq!(card.expiration.as_deref(), Some("10/12"));
        assert_eq!(card.card_number.as_deref(), Some("9999999999"));
        assert_eq!(card.masked_card_number.as_deref(), Some("******9999"));
        assert_eq!(
            transport.last_request().url,
            "https://cartaoprotegido.braspag.com.br/CartaoProtegido.asmx/GetCreditCard"
        );
        assert_eq!(
            transport.last_body(),
            format!("MerchantKey=um+id+qualquer&JustClickKey={JUST_CLICK_KEY}")
        );
    }

    #[tokio::test]
    async fn test_get_accepts_empty_card_number() {
        let transport = FakeTransport::replying(&GET_RESPONSE.replace("9999999999", ""));
        let context = homologation();
        let card =
            ProtectedCreditCard::new(&context, ConnectorDependencies::with_defaults(&transport))
                .get(JUST_CLICK_KEY)
                .await
                .unwrap();
        assert_eq!(card.card_number.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_just_click_shop_body() {
        let transport = FakeTransport::replying(JUST_CLICK_SHOP_RESPONSE);
        let context = homologation();
        let response =
            ProtectedCreditCard::new(&context, ConnectorDependencies::with_defaults(&transport))
                .just_click_shop(&just_click_shop_params())
                .await
                .unwrap();

        assert_eq!(response.success, Some(true));
        assert_eq!(response.return_code.as_deref(), Some("4"));
        assert_eq!(response.acquirer_transaction_id, None);

        let request = transport.last_request();
        assert_eq!(
            request.header_value(consts::SOAP_ACTION_HEADER).as_deref(),
            Some("\"http://www.cartaoprotegido.com.br/WebService/JustClickShop\"")
        );
        let body = transport.last_body();
        assert!(body.contains("<justClickShopRequestWS>"));
        assert!(body.contains("<RequestId>123</RequestId>"));
        assert!(body.contains("<MerchantKey>um id qualquer</MerchantKey>"));
        assert!(body.contains("<CustomerName>Joao Silva</CustomerName>"));
        assert!(body.contains("<OrderId>999</OrderId>"));
        assert!(body.contains("<Amount>10.5</Amount>"));
        assert!(body.contains("<PaymentMethod>20</PaymentMethod>"));
        assert!(body.contains("<PaymentType>test</PaymentType>"));
        assert!(body.contains("<NumberInstallments>3</NumberInstallments>"));
        assert!(body.contains(&format!("<JustClickKey>{JUST_CLICK_KEY}</JustClickKey>")));
        assert!(body.contains("<SecurityCode>123</SecurityCode>"));
    }

    #[tokio::test]
    async fn test_just_click_shop_forwards_opaque_key() {
        let transport = FakeTransport::replying(JUST_CLICK_SHOP_RESPONSE);
        let context = homologation();
        let params = JustClickShopParams {
            just_click_key: Some("key".to_string()),
            ..just_click_shop_params()
        };
        ProtectedCreditCard::new(&context, ConnectorDependencies::with_defaults(&transport))
            .just_click_shop(&params)
            .await
            .unwrap();

        let body = transport.last_body();
        assert!(body.contains("<JustClickKey>key</JustClickKey>"));
        assert!(body.contains("<RequestId>123</RequestId>"));
    }

    #[tokio::test]
    async fn test_just_click_shop_validation() {
        let cases: &[(fn(&mut JustClickShopParams), ValidationError)] = &[
            (
                |params| params.amount = None,
                ValidationError::IncompleteParams {
                    field_name: "amount",
                },
            ),
            (
                |params| params.payment_method = Some("boleto".to_string()),
                ValidationError::InvalidPaymentMethod,
            ),
            (
                |params| params.just_click_key = None,
                ValidationError::IncompleteParams {
                    field_name: "just_click_key",
                },
            ),
            (
                |params| params.number_installments = Some(0),
                ValidationError::InvalidNumberPayments,
            ),
        ];
        let transport = FakeTransport::replying(JUST_CLICK_SHOP_RESPONSE);
        let context = homologation();
        let protected_card =
            ProtectedCreditCard::new(&context, ConnectorDependencies::with_defaults(&transport));

        for (change, expected) in cases.iter().cloned() {
            let mut params = just_click_shop_params();
            change(&mut params);
            let error = protected_card.just_click_shop(&params).await.unwrap_err();
            assert_eq!(validation_error(&error), expected);
        }
        assert_eq!(transport.calls(), 0);
    }
}

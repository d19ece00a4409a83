use std::{str::FromStr, time::Duration};

use common_utils::{
    errors::CustomResult,
    request::{Headers, Method, Request},
};
use domain_types::{
    connector_types::RawConnectorResponse, errors::HttpClientError,
    router_response_types::Response,
};
use error_stack::{report, ResultExt};
use interfaces::api::ConnectorTransport;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};

use crate::configs;

/// [`ConnectorTransport`] backed by a shared `reqwest` client.
///
/// Redirects are not followed and nothing is retried.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: &configs::HttpClient) -> CustomResult<Self, HttpClientError> {
        let mut client_builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(Duration::from_secs(config.timeout_secs));

        if let Some(url) = config.proxy_url.as_ref() {
            client_builder = client_builder.proxy(
                reqwest::Proxy::all(url)
                    .change_context(HttpClientError::ClientConstructionFailed)
                    .attach_printable("invalid proxy url")?,
            );
        }

        let client = client_builder
            .build()
            .change_context(HttpClientError::ClientConstructionFailed)?;
        Ok(Self { client })
    }
}

pub trait HeaderExt {
    fn construct_header_map(self) -> CustomResult<HeaderMap, HttpClientError>;
}

impl HeaderExt for Headers {
    fn construct_header_map(self) -> CustomResult<HeaderMap, HttpClientError> {
        self.into_iter().try_fold(
            HeaderMap::new(),
            |mut header_map, (header_name, header_value)| {
                let header_name = HeaderName::from_str(&header_name)
                    .change_context(HttpClientError::HeaderMapConstructionFailed)
                    .attach_printable_lazy(|| format!("invalid header name {header_name}"))?;
                let header_value = header_value.into_inner();
                let header_value = HeaderValue::from_str(&header_value)
                    .change_context(HttpClientError::HeaderMapConstructionFailed)?;
                header_map.append(header_name, header_value);
                Ok(header_map)
            },
        )
    }
}

#[async_trait::async_trait]
impl ConnectorTransport for ReqwestTransport {
    async fn send(&self, request: Request) -> CustomResult<Response, HttpClientError> {
        let url =
            reqwest::Url::parse(&request.url).change_context(HttpClientError::UrlParsingFailed)?;
        let headers = request.headers.construct_header_map()?;

        let mut request_builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        }
        .headers(headers);

        if let Some(body) = request.body {
            if let Some(content_type) = body.content_type() {
                request_builder = request_builder.header(CONTENT_TYPE, content_type.mime());
            }
            request_builder = request_builder.body(body.into_bytes());
        }

        let response = request_builder.send().await.map_err(|error| {
            let client_error = if error.is_timeout() {
                HttpClientError::RequestTimeoutReceived
            } else {
                HttpClientError::RequestNotSent(error.to_string())
            };
            tracing::warn!(error = %client_error, "request to gateway failed");
            report!(client_error)
        })?;

        let status_code = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .change_context(HttpClientError::ResponseDecodingFailed)?;

        if !(200..300).contains(&status_code) {
            return Err(report!(HttpClientError::UnexpectedStatus { status_code }))
                .attach(RawConnectorResponse(
                    String::from_utf8_lossy(&body).into_owned(),
                ));
        }

        Ok(Response::new(status_code, body))
    }
}

pub mod configs;
pub mod http_client;
pub mod logger;

pub use http_client::ReqwestTransport;

/// Gateway operations a caller can run. Each maps to one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum GatewayOperation {
    Authorize,
    Capture,
    VoidTransaction,
    Info,
    SaveProtectedCard,
    GetProtectedCard,
    JustClickShop,
}

/// Format predicates for gateway references, checked before any request is built.
pub trait ReferenceValidator: Send + Sync {
    fn is_valid_order_id(&self, order_id: &str) -> bool;

    fn is_valid_just_click_key(&self, just_click_key: &str) -> bool;

    fn is_valid_request_id(&self, request_id: &str) -> bool;
}

pub mod api;
pub mod verification;

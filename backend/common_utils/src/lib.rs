//! Common utilities for the Braspag connector workspace

pub mod consts;
pub mod errors;
pub mod ext_traits;
pub mod request;

pub use errors::{CustomResult, ParsingError};
pub use hyperswitch_masking::{ExposeInterface, Maskable, PeekInterface, Secret};
pub use request::{ContentType, Headers, Method, Request, RequestContent};

pub mod braspag;
pub use self::braspag::{
    BraspagEndpoints, BraspagReferenceValidator, ConnectorDependencies, CreditCard,
    ProtectedCreditCard,
};

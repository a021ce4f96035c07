//! Domain-wide constants

/// Logical name of the hosted service contract.
pub const SERVICE_NAME: &str = "Operations";

/// Wire name of the single operation the contract exposes.
pub const GET_VALUE_FROM_CONSTRUCTOR: &str = "GetValueFromConstructor";

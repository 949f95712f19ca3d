use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const PAYMENT_KEY: &str = "payment";
pub const RETURN_URL: &str = "return_url";
pub const CUSTOMER_CANCEL_URL: &str = "customer_cancel_url";
pub const FAILURE_RETURN_URL: &str = "failure_return_url";

/// The payment request assembled by the upstream payment data builder.
///
/// Kept as an ordered JSON object so that every field the override does not
/// touch is written back exactly as it was received.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(transparent)]
pub struct PaymentRequest(Map<String, Value>);

impl PaymentRequest {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Returns the `payment` section if it is a non-empty object.
    pub fn payment(&self) -> Option<&Map<String, Value>> {
        match self.0.get(PAYMENT_KEY) {
            Some(Value::Object(section)) if !section.is_empty() => Some(section),
            _ => None,
        }
    }

    /// Mutable access to the `payment` section, with the same rules as [`Self::payment`].
    pub fn payment_mut(&mut self) -> Option<&mut Map<String, Value>> {
        match self.0.get_mut(PAYMENT_KEY) {
            Some(Value::Object(section)) if !section.is_empty() => Some(section),
            _ => None,
        }
    }

    /// Reads a string field of the `payment` section.
    pub fn payment_str(&self, field: &str) -> Option<&str> {
        self.payment()?.get(field)?.as_str()
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

use super::metadata::TAPBUY_ADDITIONAL_INFO_KEY;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The order payment entity the request was built from.
///
/// `additional_information` is a free-form bag the storefront fills in
/// during checkout. The partner stashes its serialized URL overrides there.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct PaymentRecord {
    #[serde(default)]
    pub additional_information: Map<String, Value>,
}

impl PaymentRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper to set one additional information entry.
    pub fn with_additional_information(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.additional_information.insert(key.to_string(), value.into());
        self
    }

    /// Returns the entry stored under `key` when it is a string.
    pub fn get_additional_information(&self, key: &str) -> Option<&str> {
        self.additional_information.get(key)?.as_str()
    }
}

/// Arguments the upstream builder was invoked with.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct BuildSubject {
    #[serde(default)]
    pub payment: PaymentRecord,
}

impl BuildSubject {
    pub fn new(payment: PaymentRecord) -> Self {
        Self { payment }
    }

    /// Raw partner metadata attached to the payment, if any.
    ///
    /// Empty strings are reported as absent.
    pub fn partner_metadata(&self) -> Option<&str> {
        self.payment
            .get_additional_information(TAPBUY_ADDITIONAL_INFO_KEY)
            .filter(|raw| !raw.is_empty())
    }
}

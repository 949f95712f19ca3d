use crate::error::MetadataDecodeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Additional information key the partner metadata is stored under.
pub const TAPBUY_ADDITIONAL_INFO_KEY: &str = "tapbuy";

/// URL overrides supplied by the partner for one payment.
///
/// Unknown keys are ignored and a `null` value counts as absent.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct PartnerMetadata {
    #[serde(default)]
    pub accept_url: Option<String>,
    #[serde(default)]
    pub cancel_url: Option<String>,
}

impl PartnerMetadata {
    pub fn is_empty(&self) -> bool {
        self.accept_url.is_none() && self.cancel_url.is_none()
    }
}

/// Outcome of decoding the raw partner metadata.
#[derive(Debug)]
pub enum MetadataDecode {
    Decoded(PartnerMetadata),
    /// The blob was well formed but did not hold a mapping.
    NotAMapping,
    Failed(MetadataDecodeError),
}

impl MetadataDecode {
    /// Classifies the result of unserializing the raw blob.
    pub fn from_unserialized(unserialized: Result<Value, MetadataDecodeError>) -> Self {
        match unserialized {
            Ok(value @ Value::Object(_)) => match serde_json::from_value(value) {
                Ok(metadata) => Self::Decoded(metadata),
                Err(e) => Self::Failed(e.into()),
            },
            Ok(_) => Self::NotAMapping,
            Err(e) => Self::Failed(e),
        }
    }
}

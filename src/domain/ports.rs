use crate::error::MetadataDecodeError;
use serde_json::Value;

/// Tells whether the current inbound call comes from the checkout partner.
pub trait OriginDetector: Send + Sync {
    fn is_partner_call(&self) -> bool;
}

/// Read access to the inbound request's headers.
pub trait RequestAccessor: Send + Sync {
    /// Header lookup, case-insensitive on the name.
    fn header(&self, name: &str) -> Option<&str>;
}

/// Turns the stored metadata blob back into a value.
pub trait MetadataSerializer: Send + Sync {
    fn unserialize(&self, raw: &str) -> Result<Value, MetadataDecodeError>;
}

pub type OriginDetectorBox = Box<dyn OriginDetector>;
pub type MetadataSerializerBox = Box<dyn MetadataSerializer>;

/// Builds a detector for one inbound request.
pub type OriginDetectorFactory =
    Box<dyn Fn(http::HeaderMap) -> OriginDetectorBox + Send + Sync>;

use crate::domain::metadata::MetadataDecode;
use crate::domain::payment::BuildSubject;
use crate::domain::ports::{MetadataSerializerBox, OriginDetector};
use crate::domain::request::{
    CUSTOMER_CANCEL_URL, FAILURE_RETURN_URL, PaymentRequest, RETURN_URL,
};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Why a payment request was left untouched.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SkipReason {
    NoMetadata,
    NotPartnerCall,
    MalformedMetadata,
    NotAMapping,
    /// The mapping holds neither `accept_url` nor `cancel_url`.
    NoOverrides,
    NoPaymentSection,
}

/// What the override did to a payment request.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum OverrideOutcome {
    Skipped(SkipReason),
    Applied {
        original_return_url: Option<String>,
        return_url: Option<String>,
        cancel_url: Option<String>,
    },
}

/// Rewrites the return and cancel URLs of a payment request for partner calls.
///
/// Runs after the upstream builder has assembled the request. It never fails:
/// any problem with the stored metadata leaves the request as it was, so the
/// customer's checkout carries on with the storefront's own URLs.
pub struct PaymentUrlOverride {
    serializer: MetadataSerializerBox,
}

impl PaymentUrlOverride {
    /// Creates the rule with the serializer used to decode stored metadata.
    pub fn new(serializer: MetadataSerializerBox) -> Self {
        Self { serializer }
    }

    /// Applies the override and returns the possibly modified request.
    pub fn apply(
        &self,
        request: PaymentRequest,
        metadata_raw: Option<&str>,
        is_partner_call: bool,
    ) -> PaymentRequest {
        self.evaluate(request, metadata_raw, is_partner_call).0
    }

    /// Entry point mirroring the builder hook: reads the metadata off the
    /// build subject and asks `detector` where the call comes from.
    pub fn after_build(
        &self,
        result: PaymentRequest,
        subject: &BuildSubject,
        detector: &dyn OriginDetector,
    ) -> PaymentRequest {
        self.apply(result, subject.partner_metadata(), detector.is_partner_call())
    }

    /// Same as [`Self::apply`] but also reports what happened.
    pub fn evaluate(
        &self,
        mut request: PaymentRequest,
        metadata_raw: Option<&str>,
        is_partner_call: bool,
    ) -> (PaymentRequest, OverrideOutcome) {
        let Some(raw) = metadata_raw.filter(|raw| !raw.is_empty()) else {
            return (request, OverrideOutcome::Skipped(SkipReason::NoMetadata));
        };
        if !is_partner_call {
            return (request, OverrideOutcome::Skipped(SkipReason::NotPartnerCall));
        }

        let metadata = match MetadataDecode::from_unserialized(self.serializer.unserialize(raw)) {
            MetadataDecode::Decoded(metadata) => metadata,
            MetadataDecode::NotAMapping => {
                debug!("Tapbuy metadata is not a mapping, payment URLs left unchanged");
                return (request, OverrideOutcome::Skipped(SkipReason::NotAMapping));
            }
            MetadataDecode::Failed(e) => {
                warn!(
                    error = %e,
                    "Tapbuy metadata could not be unserialized, payment URLs left unchanged"
                );
                return (request, OverrideOutcome::Skipped(SkipReason::MalformedMetadata));
            }
        };
        if metadata.is_empty() {
            debug!("Tapbuy metadata has no URL to override, payment URLs left unchanged");
            return (request, OverrideOutcome::Skipped(SkipReason::NoOverrides));
        }

        let Some(payment) = request.payment_mut() else {
            debug!("payment request has no payment section, payment URLs left unchanged");
            return (request, OverrideOutcome::Skipped(SkipReason::NoPaymentSection));
        };

        let original_return_url = payment
            .get(RETURN_URL)
            .and_then(Value::as_str)
            .map(str::to_owned);

        if let Some(accept_url) = &metadata.accept_url {
            payment.insert(RETURN_URL.to_string(), Value::String(accept_url.clone()));
        }
        if let Some(cancel_url) = &metadata.cancel_url {
            payment.insert(
                CUSTOMER_CANCEL_URL.to_string(),
                Value::String(cancel_url.clone()),
            );
            payment.insert(
                FAILURE_RETURN_URL.to_string(),
                Value::String(cancel_url.clone()),
            );
        }

        let return_url = payment
            .get(RETURN_URL)
            .and_then(Value::as_str)
            .map(str::to_owned);

        info!(
            original_return_url = ?original_return_url,
            return_url = ?return_url,
            customer_cancel_url = ?metadata.cancel_url,
            failure_return_url = ?metadata.cancel_url,
            "Tapbuy payment URLs override applied"
        );

        (
            request,
            OverrideOutcome::Applied {
                original_return_url,
                return_url,
                cancel_url: metadata.cancel_url,
            },
        )
    }
}

impl Default for PaymentUrlOverride {
    fn default() -> Self {
        Self::new(Box::new(crate::infrastructure::json_serializer::JsonSerializer::new()))
    }
}

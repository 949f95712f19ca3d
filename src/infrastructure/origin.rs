use crate::domain::ports::{
    OriginDetector, OriginDetectorBox, OriginDetectorFactory, RequestAccessor,
};
use http::HeaderMap;

/// Header the partner sets on every call it makes to the storefront.
pub const DEFAULT_PARTNER_HEADER: &str = "X-Tapbuy-Call";

impl RequestAccessor for HeaderMap {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name)?.to_str().ok()
    }
}

/// Treats every call as a partner call.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysPartner;

impl OriginDetector for AlwaysPartner {
    fn is_partner_call(&self) -> bool {
        true
    }
}

/// Never overrides anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverPartner;

impl OriginDetector for NeverPartner {
    fn is_partner_call(&self) -> bool {
        false
    }
}

/// Partner call when the partner header is present with a non-empty value.
#[derive(Debug, Clone)]
pub struct HeaderOriginDetector<R: RequestAccessor> {
    request: R,
    header_name: String,
}

impl<R: RequestAccessor> HeaderOriginDetector<R> {
    pub fn new(request: R) -> Self {
        Self::with_header(request, DEFAULT_PARTNER_HEADER)
    }

    pub fn with_header(request: R, header_name: impl Into<String>) -> Self {
        Self {
            request,
            header_name: header_name.into(),
        }
    }
}

impl<R: RequestAccessor> OriginDetector for HeaderOriginDetector<R> {
    fn is_partner_call(&self) -> bool {
        self.request
            .header(&self.header_name)
            .is_some_and(|value| !value.trim().is_empty())
    }
}

/// Dedicated partner call classifier.
///
/// Same header contract as [`HeaderOriginDetector`], and when a token is
/// configured the header value must match it exactly.
#[derive(Debug, Clone)]
pub struct PartnerCallDetector<R: RequestAccessor> {
    request: R,
    header_name: String,
    token: Option<String>,
}

impl<R: RequestAccessor> PartnerCallDetector<R> {
    pub fn new(request: R, header_name: impl Into<String>, token: Option<String>) -> Self {
        Self {
            request,
            header_name: header_name.into(),
            token,
        }
    }
}

impl<R: RequestAccessor> OriginDetector for PartnerCallDetector<R> {
    fn is_partner_call(&self) -> bool {
        let Some(value) = self.request.header(&self.header_name).map(str::trim) else {
            return false;
        };
        if value.is_empty() {
            return false;
        }
        match &self.token {
            Some(token) => value == token,
            None => true,
        }
    }
}

/// How the call origin is decided, chosen when the hook is wired up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OriginStrategy {
    Always,
    Never,
    Header,
    #[default]
    Detector,
}

/// Returns a factory building the configured detector for each inbound request.
pub fn detector_factory(
    strategy: OriginStrategy,
    header_name: String,
    token: Option<String>,
) -> OriginDetectorFactory {
    match strategy {
        OriginStrategy::Always => {
            Box::new(|_: HeaderMap| Box::new(AlwaysPartner) as OriginDetectorBox)
        }
        OriginStrategy::Never => {
            Box::new(|_: HeaderMap| Box::new(NeverPartner) as OriginDetectorBox)
        }
        OriginStrategy::Header => Box::new(move |headers: HeaderMap| {
            Box::new(HeaderOriginDetector::with_header(headers, header_name.clone()))
                as OriginDetectorBox
        }),
        OriginStrategy::Detector => Box::new(move |headers: HeaderMap| {
            Box::new(PartnerCallDetector::new(
                headers,
                header_name.clone(),
                token.clone(),
            )) as OriginDetectorBox
        }),
    }
}

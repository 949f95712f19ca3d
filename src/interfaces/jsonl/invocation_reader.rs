use crate::domain::payment::BuildSubject;
use crate::domain::request::PaymentRequest;
use crate::error::{PluginError, Result};
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::{BufRead, BufReader, Read};

/// One payment build as seen by the override hook.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Invocation {
    /// The request returned by the upstream builder.
    pub result: PaymentRequest,
    #[serde(default)]
    pub subject: BuildSubject,
    /// Headers of the inbound call that triggered the build.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl Invocation {
    pub fn header_map(&self) -> Result<HeaderMap> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| PluginError::InvocationError(format!("header {name:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| PluginError::InvocationError(format!("header {name}: {e}")))?;
            map.append(name, value);
        }
        Ok(map)
    }
}

/// Reads invocations from a JSON Lines source.
///
/// Each non-blank line holds one invocation. A bad line only fails that item,
/// so the caller can report it and keep going.
pub struct InvocationReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> InvocationReader<R> {
    /// Creates a new `InvocationReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self {
            reader: BufReader::new(source),
        }
    }

    /// Returns an iterator that lazily reads and deserializes invocations.
    pub fn invocations(self) -> impl Iterator<Item = Result<Invocation>> {
        self.reader
            .lines()
            .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
            .map(|line| -> Result<Invocation> { Ok(serde_json::from_str(&line?)?) })
    }
}

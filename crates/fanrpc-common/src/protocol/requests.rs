use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;

use super::error::{FanrpcError, Result};

/// Reserved argument-key prefix marking a symbolic key.
pub const SYMBOL_PREFIX: &str = "_SYM_";

/// Call timeout applied when the request does not carry one, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// The request envelope as it appears on stdin or in a request file.
///
/// `agent` and `action` are required for dispatch but optional here: their
/// absence is a distinct failure (exit 3) from input that does not decode as
/// an object at all (exit 2). An explicit `null` behaves like an absent key.
/// Unknown top-level keys are ignored. Defaults apply at translation, not
/// here.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RpcRequest {
    #[serde(default)]
    pub agent: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub arguments: Option<Map<String, Value>>,
    #[serde(default)]
    pub identity: Option<String>,
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl RpcRequest {
    /// Decodes an envelope from raw request bytes.
    ///
    /// Any decode failure (invalid JSON, non-object top level, wrong-typed
    /// field) maps to [`FanrpcError::MalformedInput`].
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| FanrpcError::MalformedInput(e.to_string()))
    }

    /// Validates the envelope and builds the translated call.
    ///
    /// The argument mapping is translated exactly once here; the resulting
    /// [`Call`] is never mutated afterwards.
    pub fn into_call(self) -> Result<Call> {
        let agent = require(self.agent, "agent")?;
        let action = require(self.action, "action")?;
        Ok(Call {
            agent,
            action,
            args: translate_arguments(self.arguments.unwrap_or_default()),
            identity: self.identity,
            timeout: Duration::from_secs(self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        })
    }
}

fn require(field: Option<String>, name: &'static str) -> Result<String> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(FanrpcError::MissingField(name)),
    }
}

/// A validated, translated RPC call ready for dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub agent: String,
    pub action: String,
    pub args: CallArgs,
    pub identity: Option<String>,
    pub timeout: Duration,
}

/// An argument key, either a plain string key or a symbolic identifier.
///
/// Symbolic keys are a marshalling hint for the callee; the distinction never
/// affects the argument value. On the wire this serializes as
/// `{"kind":"plain","name":...}` or `{"kind":"symbol","name":...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArgKey {
    Plain { name: String },
    Symbol { name: String },
}

impl ArgKey {
    /// Translates a raw mapping key, stripping the reserved prefix.
    ///
    /// `"_SYM_mode"` becomes the symbol `mode`; any other key passes through
    /// as a plain key. A bare `"_SYM_"` yields a symbol with an empty name.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(SYMBOL_PREFIX) {
            Some(rest) => ArgKey::Symbol { name: rest.to_string() },
            None => ArgKey::Plain { name: raw.to_string() },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ArgKey::Plain { name } | ArgKey::Symbol { name } => name,
        }
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, ArgKey::Symbol { .. })
    }
}

/// One translated argument. The value rides through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallArg {
    pub key: ArgKey,
    pub value: Value,
}

/// Translated argument list, in the order of the source mapping.
pub type CallArgs = Vec<CallArg>;

/// Translates a raw argument mapping into [`CallArgs`].
pub fn translate_arguments(arguments: Map<String, Value>) -> CallArgs {
    arguments
        .into_iter()
        .map(|(key, value)| CallArg {
            key: ArgKey::parse(&key),
            value,
        })
        .collect()
}

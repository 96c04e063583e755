use serde::Deserialize;

/// Response wrapper shared by every endpoint: `{ ok, message?, data?, token? }`.
///
/// Only `ok` is mandatory. The other fields default to `None` so one type can
/// decode both success and failure bodies.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub ok: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
    #[serde(default)]
    pub token: Option<String>,
}

impl<T> Envelope<T> {
    /// Server message, if it carries any text.
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

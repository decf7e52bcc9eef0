//! Error taxonomy for auth calls.
//!
//! DESIGN
//! ======
//! Resolution failures are recovered by the resolver itself; login failures
//! surface to the sign-in page through [`AuthError::user_message`].
//! Authorization failures are not errors at all (see `util::guard`).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub const UNAUTHORIZED: u16 = 401;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// A 2xx response whose body is not a valid auth envelope.
    #[error("invalid auth response: {0}")]
    Decode(String),
    /// Browser-only call made from SSR or a native build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl AuthError {
    /// Whether the backend rejected the presented credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Rejected { status: UNAUTHORIZED, .. })
    }

    /// Text shown to the user on the sign-in page.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            Self::Rejected { status: 400 | 401 | 403, .. } => "Usuario o contraseña incorrectos.".to_owned(),
            Self::Rejected { status, .. } => format!("El servidor respondió con un error ({status})."),
            Self::Network(_) | Self::Unavailable => "No se pudo contactar al servidor.".to_owned(),
            Self::Decode(_) => "Respuesta inesperada del servidor.".to_owned(),
        }
    }
}

/// Error body shape returned by the backend on failures.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Extract the `message` field from a raw error body, if any.
pub fn error_message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .map(|parsed| parsed.message)
        .unwrap_or_default()
}

use thiserror::Error;

/// Which setting a configuration error is about, and the offending value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Environment variable or builder setting, e.g. `RAGFLOW_API_URL`.
    pub setting: Option<String>,
    pub value: Option<String>,
}

impl ErrorContext {
    pub fn setting(name: impl Into<String>) -> Self {
        Self {
            setting: Some(name.into()),
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Unified error type for the RagFlow client.
///
/// Callers branch on the variant: `Authentication` and `NotFound` come from
/// HTTP 401 / 404, `Api` covers every other HTTP failure, malformed JSON and
/// non-zero envelope codes.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Authentication error: {message}")]
    Authentication { message: String },

    #[error("Resource not found: {message}")]
    NotFound { message: String },

    #[error("API error: {message}{}", format_api_detail(.status, .code))]
    Api {
        message: String,
        status: Option<u16>,
        code: Option<i64>,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] crate::transport::TransportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn format_context(ctx: &ErrorContext) -> String {
    match (&ctx.setting, &ctx.value) {
        (Some(setting), Some(value)) => format!(" ({} = {:?})", setting, value),
        (Some(setting), None) => format!(" ({})", setting),
        (None, Some(value)) => format!(" ({:?})", value),
        (None, None) => String::new(),
    }
}

fn format_api_detail(status: &Option<u16>, code: &Option<i64>) -> String {
    match (status, code) {
        (Some(s), Some(c)) => format!(" (HTTP {}, code {})", s, c),
        (Some(s), None) => format!(" (HTTP {})", s),
        (None, Some(c)) => format!(" (code {})", c),
        (None, None) => String::new(),
    }
}

impl Error {
    pub fn authentication(msg: impl Into<String>) -> Self {
        Error::Authentication {
            message: msg.into(),
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound {
            message: msg.into(),
        }
    }

    pub fn api(msg: impl Into<String>) -> Self {
        Error::Api {
            message: msg.into(),
            status: None,
            code: None,
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::default())
    }

    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// HTTP status carried by the error, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Authentication { .. } => Some(401),
            Error::NotFound { .. } => Some(404),
            Error::Api { status, .. } => *status,
            _ => None,
        }
    }

    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}

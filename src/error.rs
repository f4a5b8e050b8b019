use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChessError {
    // Caller-supplied argument rejected before any request is made
    #[error("Invalid parameter `{parameter}`: {message}")]
    InvalidParameter { parameter: String, message: String },

    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    // Specific HTTP status code errors
    #[error("API request not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API returned unexpected status ({status}): {message} (URL: {url})")]
    ApiUnexpectedStatus {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API rate limit exceeded (429): {message} (URL: {url})")]
    ApiRateLimit { message: String, url: String },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    // Schema construction errors
    #[error("{schema}: payload has no `@id` self-reference")]
    MissingIdentifier { schema: &'static str },

    #[error("{schema}: missing required field `{field}`")]
    MissingField { schema: &'static str, field: String },

    #[error("{schema}: field `{field}` expected {expected}, found {found}")]
    TypeCoercion {
        schema: &'static str,
        field: String,
        expected: &'static str,
        found: String,
    },

    #[error("{schema}: field `{field}` has unknown value {value:?}")]
    InvalidEnumValue {
        schema: &'static str,
        field: String,
        value: String,
    },

    #[error("{schema}: field `{field}` expected {expected} entries, found {found}")]
    ShapeMismatch {
        schema: &'static str,
        field: String,
        expected: usize,
        found: usize,
    },

    #[error("{schema}: unexpected payload shape: {message}")]
    UnexpectedShape {
        schema: &'static str,
        message: String,
    },

    #[error("PGN decoding error: {0}")]
    Pgn(#[source] std::io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl ChessError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404 and 429)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an error for a status that is neither success, 4xx nor 5xx
    /// (informational or an unfollowed redirect)
    pub fn api_unexpected_status(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiUnexpectedStatus {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API rate limit error
    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn missing_identifier(schema: &'static str) -> Self {
        Self::MissingIdentifier { schema }
    }

    pub fn missing_field(schema: &'static str, field: impl Into<String>) -> Self {
        Self::MissingField {
            schema,
            field: field.into(),
        }
    }

    pub fn type_coercion(
        schema: &'static str,
        field: impl Into<String>,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeCoercion {
            schema,
            field: field.into(),
            expected,
            found: found.into(),
        }
    }

    pub fn invalid_enum_value(
        schema: &'static str,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidEnumValue {
            schema,
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn shape_mismatch(
        schema: &'static str,
        field: impl Into<String>,
        expected: usize,
        found: usize,
    ) -> Self {
        Self::ShapeMismatch {
            schema,
            field: field.into(),
            expected,
            found,
        }
    }

    pub fn unexpected_shape(schema: &'static str, message: impl Into<String>) -> Self {
        Self::UnexpectedShape {
            schema,
            message: message.into(),
        }
    }

    /// Check if the error was raised while validating a payload
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            ChessError::MissingIdentifier { .. }
                | ChessError::MissingField { .. }
                | ChessError::TypeCoercion { .. }
                | ChessError::InvalidEnumValue { .. }
                | ChessError::ShapeMismatch { .. }
                | ChessError::UnexpectedShape { .. }
        )
    }

    /// Check if the error came from the HTTP layer
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            ChessError::ApiFetch(_)
                | ChessError::ApiNotFound { .. }
                | ChessError::ApiServerError { .. }
                | ChessError::ApiClientError { .. }
                | ChessError::ApiUnexpectedStatus { .. }
                | ChessError::ApiRateLimit { .. }
                | ChessError::NetworkTimeout { .. }
                | ChessError::NetworkConnection { .. }
                | ChessError::ApiMalformedJson { .. }
        )
    }
}

use tfconverge::{Classify, ErrorKind};
use thiserror::Error;

/// Error codes AWS services use for throttling
const THROTTLING_CODES: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "ThrottledException",
    "RequestThrottledException",
    "TooManyRequestsException",
    "ProvisionedThroughputExceededException",
    "RequestLimitExceeded",
    "PriorRequestNotComplete",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AwsError {
    #[error("{code}: {message}")]
    Service {
        code: String,
        message: String,
        status: u16,
    },

    #[error("Request timeout after {0} seconds")]
    Timeout(u64),

    #[error("Too many requests, rate limited")]
    RateLimited,

    #[error("Service unavailable, retry later")]
    ServiceUnavailable,

    #[error("Connection failed: {0}")]
    Connection(String),
}

impl AwsError {
    pub fn service(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
        AwsError::Service {
            code: code.into(),
            message: message.into(),
            status,
        }
    }

    /// A 400-class modeled service exception, the usual shape of AWS errors
    pub fn exception(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::service(code, message, 400)
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            AwsError::Service { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    pub fn code_equals(&self, code: &str) -> bool {
        self.code() == Some(code)
    }

    /// Whether this is a `code` error whose message contains `needle`
    pub fn message_contains(&self, code: &str, needle: &str) -> bool {
        match self {
            AwsError::Service {
                code: c, message, ..
            } => c == code && message.contains(needle),
            _ => false,
        }
    }
}

impl Classify for AwsError {
    fn classify(&self) -> ErrorKind {
        match self {
            AwsError::Service { code, status, .. } => {
                if *status == 404
                    || code.starts_with("NoSuch")
                    || code.ends_with("NotFoundException")
                    || code.ends_with("NotFoundFault")
                    || code.ends_with("NotFound")
                {
                    ErrorKind::NotFound
                } else if *status == 429
                    || *status >= 500
                    || THROTTLING_CODES.contains(&code.as_str())
                {
                    ErrorKind::Transient
                } else {
                    ErrorKind::Unretryable
                }
            }
            AwsError::Timeout(_)
            | AwsError::RateLimited
            | AwsError::ServiceUnavailable
            | AwsError::Connection(_) => ErrorKind::Transient,
        }
    }
}

use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use std::env;
use std::fmt::{self, Debug, Display};
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub code: i32,
    pub message: String,
    pub field: Option<Field>,
}

/// Names the input or rate-table field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Distance,
    Duration,
    Surge,
    VehicleType,
    Currency,
    Rates,
    BaseFare,
    PerKmRate,
    PerMinuteRate,
    MinimumFare,
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Distance => "distance",
            Self::Duration => "duration",
            Self::Surge => "surge",
            Self::VehicleType => "vehicleType",
            Self::Currency => "currency",
            Self::Rates => "rates",
            Self::BaseFare => "baseFare",
            Self::PerKmRate => "perKmRate",
            Self::PerMinuteRate => "perMinuteRate",
            Self::MinimumFare => "minimumFare",
        };

        f.write_str(name)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field {
            Some(field) => write!(f, "{} ({}): {}", self.code, field, self.message),
            None => write!(f, "{}: {}", self.code, self.message),
        }
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        Error::env_var_error(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::config_error(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::config_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
            "field": self.field,
        }));

        (status, body).into_response()
    }
}

impl Error {
    pub fn invalid_input_error(field: Field, reason: impl Into<String>) -> Self {
        Self {
            code: 101,
            message: reason.into(),
            field: Some(field),
        }
    }

    pub fn invalid_rate_table_error(field: Field, reason: impl Into<String>) -> Self {
        Self {
            code: 102,
            message: reason.into(),
            field: Some(field),
        }
    }

    pub fn env_var_error(err: env::VarError) -> Self {
        tracing::error!("environment variable error: {}", err);

        Self {
            code: 1,
            message: "environment variable error".into(),
            field: None,
        }
    }

    pub fn config_error<T: Display>(err: T) -> Self {
        tracing::error!("configuration error: {}", err);

        Self {
            code: 2,
            message: "configuration error".into(),
            field: None,
        }
    }

    pub fn server_error<T: Debug>(err: T) -> Self {
        tracing::error!("server error: {:?}", err);

        Self {
            code: 3,
            message: "server error".into(),
            field: None,
        }
    }

    pub fn unexpected_error() -> Self {
        Self {
            code: 5,
            message: "unexpected error".into(),
            field: None,
        }
    }

    pub fn is_invalid_input_error(&self) -> bool {
        self.code == 101
    }

    pub fn is_invalid_rate_table_error(&self) -> bool {
        self.code == 102
    }
}

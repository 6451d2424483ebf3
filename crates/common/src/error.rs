//! Error types for OPI storage clients

use thiserror::Error;

use crate::types::ResourceKind;

/// Result type alias using the storage client Error
pub type Result<T> = std::result::Result<T, Error>;

/// Storage client error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Resource not found: {kind} with id {id}")]
    NotFound { kind: ResourceKind, id: String },

    #[error("Resource already exists: {kind} with id {id}")]
    AlreadyExists { kind: ResourceKind, id: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("RPC failed with {code:?}: {message}")]
    Rpc { code: tonic::Code, message: String },
}

impl Error {
    /// Map a gRPC status onto the error taxonomy for a given resource.
    ///
    /// The status message is kept as-is; only the code is classified.
    pub fn from_status(status: tonic::Status, kind: ResourceKind, id: &str) -> Self {
        match status.code() {
            tonic::Code::NotFound => Error::NotFound {
                kind,
                id: id.to_string(),
            },
            tonic::Code::AlreadyExists => Error::AlreadyExists {
                kind,
                id: id.to_string(),
            },
            tonic::Code::InvalidArgument => Error::InvalidArgument(status.message().to_string()),
            tonic::Code::Cancelled => Error::Cancelled,
            tonic::Code::Unavailable => Error::Transport(status.message().to_string()),
            code => Error::Rpc {
                code,
                message: status.message().to_string(),
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Error::AlreadyExists { .. })
    }
}

impl From<tonic::transport::Error> for Error {
    fn from(e: tonic::transport::Error) -> Self {
        Error::Transport(e.to_string())
    }
}

impl From<Error> for tonic::Status {
    fn from(e: Error) -> Self {
        match e {
            Error::NotFound { kind, id } => {
                tonic::Status::not_found(format!("{} {} not found", kind, id))
            }
            Error::AlreadyExists { kind, id } => {
                tonic::Status::already_exists(format!("{} {} already exists", kind, id))
            }
            Error::InvalidArgument(msg) => tonic::Status::invalid_argument(msg),
            Error::Cancelled => tonic::Status::cancelled("operation cancelled"),
            Error::Transport(msg) => tonic::Status::unavailable(msg),
            Error::Rpc { code, message } => tonic::Status::new(code, message),
            Error::InvalidResponse(msg) => tonic::Status::internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        let kind = ResourceKind::NullDevice;

        let err = Error::from_status(tonic::Status::not_found("gone"), kind, "OpiNull9");
        assert_eq!(
            err,
            Error::NotFound {
                kind,
                id: "OpiNull9".to_string()
            }
        );

        let err = Error::from_status(tonic::Status::already_exists("dup"), kind, "OpiNull9");
        assert!(err.is_already_exists());

        let err = Error::from_status(tonic::Status::unavailable("conn refused"), kind, "x");
        assert_eq!(err, Error::Transport("conn refused".to_string()));

        let err = Error::from_status(tonic::Status::cancelled("deadline"), kind, "x");
        assert_eq!(err, Error::Cancelled);

        let err = Error::from_status(tonic::Status::invalid_argument("bad nqn"), kind, "x");
        assert_eq!(err, Error::InvalidArgument("bad nqn".to_string()));

        let err = Error::from_status(tonic::Status::permission_denied("nope"), kind, "x");
        assert_eq!(
            err,
            Error::Rpc {
                code: tonic::Code::PermissionDenied,
                message: "nope".to_string()
            }
        );
    }

    #[test]
    fn test_error_to_status_codes() {
        let status = tonic::Status::from(Error::Cancelled);
        assert_eq!(status.code(), tonic::Code::Cancelled);

        let status = tonic::Status::from(Error::InvalidArgument("bad nqn".to_string()));
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert_eq!(status.message(), "bad nqn");

        let status = tonic::Status::from(Error::Transport("conn refused".to_string()));
        assert_eq!(status.code(), tonic::Code::Unavailable);
        assert_eq!(
            Error::from_status(status, ResourceKind::AioDevice, "OpiAio4"),
            Error::Transport("conn refused".to_string())
        );
    }

    #[test]
    fn test_status_round_trip_keeps_code() {
        let status: tonic::Status = Error::AlreadyExists {
            kind: ResourceKind::AioDevice,
            id: "OpiAio4".to_string(),
        }
        .into();
        assert_eq!(status.code(), tonic::Code::AlreadyExists);
        assert!(status.message().contains("OpiAio4"));
    }
}

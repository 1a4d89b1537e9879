use thiserror::Error;

/// Failure establishing a database connection.
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("Invalid connection URL: {0}")]
    InvalidUrl(String),

    #[error("TLS error: {0}")]
    Tls(#[from] native_tls::Error),

    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] tokio_postgres::Error),
}

/// Failure executing against an established connection. Never caught or
/// retried here; callers let it propagate.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    #[error("Database error: {0}")]
    Unknown(String),
}

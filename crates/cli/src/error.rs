use connectors::sql::error::ConnectorError;
use pipeline::error::PipelineError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Pipeline failed: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("Failed to connect to the database: {0}")]
    Connector(#[from] ConnectorError),

    #[error("Invalid connection URL: {0}")]
    InvalidUrl(String),
}

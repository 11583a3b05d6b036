use std::path::PathBuf;

pub type Result<T, E = LoaderError> = std::result::Result<T, E>;

/// Failures that stop a load before or during the write.
///
/// Usage errors never reach this type; clap reports them and exits on its own.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("could not read '{}'", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not valid JSON", path.display())]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{}' is missing a required ddb setting", path.display())]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{attribute}' cannot be stored as a DynamoDB attribute")]
    Convert {
        attribute: String,
        #[source]
        source: serde_dynamo::Error,
    },

    #[error("PutItem into table '{table}' failed")]
    PutItem {
        table: String,
        #[source]
        source: aws_sdk_dynamodb::Error,
    },
}

use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::path::Path;
use tracing::info;

use crate::dynamodb::Table;
use crate::errors::{LoaderError, Result};
use crate::utils::read_json_file;

/// The `ddb` block of the config file.
///
/// `partition_key_value_field` is the literal key value written to the table,
/// not the name of a field to look up in the data file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DdbSettings {
    pub table_name: String,
    pub partition_key_name: String,
    pub partition_key_value_field: Value,
}

#[derive(Deserialize)]
struct ConfigFile {
    ddb: DdbSettings,
}

/// A loaded config file: the full document as read, plus its `ddb` settings.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    document: Value,
    ddb: DdbSettings,
}

impl LoaderConfig {
    /// Reads and validates the config file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let document = read_json_file(path)?;
        let ConfigFile { ddb } =
            ConfigFile::deserialize(&document).map_err(|source| LoaderError::InvalidConfig {
                path: path.to_path_buf(),
                source,
            })?;

        info!(
            "Loaded config for table '{}' keyed on '{}'",
            ddb.table_name, ddb.partition_key_name
        );
        Ok(Self { document, ddb })
    }

    pub fn ddb(&self) -> &DdbSettings {
        &self.ddb
    }

    /// The target table described by the `ddb` block.
    pub fn table(&self) -> Table<'_> {
        Table::new(&self.ddb.table_name, &self.ddb.partition_key_name)
    }
}

impl fmt::Display for LoaderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.document)
    }
}

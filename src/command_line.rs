use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use crate::config::LoaderConfig;
use crate::dynamodb::{DynamoDb, Item};
use crate::utils::read_json_file;

/// Load DynamoDB Table with values
#[derive(Debug, Parser)]
#[command(name = "load-ddb", version, about = "Load DynamoDB Table with values")]
pub struct Cli {
    /// Specify AWS Profile to use
    #[arg(long)]
    pub profile: String,

    /// Specify JSON file for loading data in DDB
    #[arg(long)]
    pub json: PathBuf,

    /// Specify config file
    #[arg(long)]
    pub config: PathBuf,
}

/// Everything needed for the write, assembled without touching the network.
#[derive(Debug)]
pub struct PreparedLoad {
    pub config: LoaderConfig,
    pub item: Item,
}

/// Reads the config (printing it once loaded), then the data file, and
/// builds the record.
///
/// Any failure here happens before a client exists, so no request is sent.
pub fn prepare(cli: &Cli) -> Result<PreparedLoad> {
    let config = LoaderConfig::load(&cli.config).context("config load failed")?;
    println!("Read successful");
    println!("{config}");

    let payload = read_json_file(&cli.json).context("data load failed")?;
    info!("Loaded data from '{}'", cli.json.display());

    let ddb = config.ddb();
    let item = Item::record(&config.table(), &ddb.partition_key_value_field, &payload)
        .context("record assembly failed")?;

    Ok(PreparedLoad { config, item })
}

/// Runs one load: prepare the record, connect with the profile, put the item
/// and print the service's response.
pub async fn run(cli: &Cli) -> Result<()> {
    let PreparedLoad { config, item } = prepare(cli)?;

    let ddb = DynamoDb::connect(&cli.profile).await;
    let output = ddb
        .put_item(&config.table(), item)
        .await
        .context("write failed")?;

    println!("{output:?}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LoaderError;
    use crate::utils::write_temp_file;
    use clap::error::ErrorKind;
    use serde_json::{json, Value};

    const CONFIG: &str =
        r#"{"ddb":{"tableName":"T","partitionKeyName":"id","partitionKeyValueField":"abc123"}}"#;

    fn cli(config: &std::path::Path, json: &std::path::Path) -> Cli {
        Cli {
            profile: "test".to_string(),
            json: json.to_path_buf(),
            config: config.to_path_buf(),
        }
    }

    #[test]
    fn test_parses_all_three_options() {
        let cli = Cli::try_parse_from([
            "load-ddb",
            "--profile",
            "dev",
            "--json",
            "data.json",
            "--config",
            "config.json",
        ])
        .unwrap();

        assert_eq!(cli.profile, "dev");
        assert_eq!(cli.json, PathBuf::from("data.json"));
        assert_eq!(cli.config, PathBuf::from("config.json"));
    }

    #[test]
    fn test_each_option_is_required() {
        let full = [
            ("--profile", "dev"),
            ("--json", "data.json"),
            ("--config", "config.json"),
        ];
        for skipped in 0..full.len() {
            let mut args = vec!["load-ddb"];
            for (i, (flag, value)) in full.iter().enumerate() {
                if i != skipped {
                    args.extend([*flag, *value]);
                }
            }
            let err = Cli::try_parse_from(args).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
            assert_eq!(err.exit_code(), 2);
        }
    }

    #[test]
    fn test_prepare_builds_record_from_config_and_data() {
        let config = write_temp_file("cli-config.json", CONFIG);
        let data = write_temp_file("cli-data.json", r#"{"x":1,"y":[2,3]}"#);

        let load = prepare(&cli(&config, &data)).unwrap();
        assert_eq!(load.config.table().name(), "T");
        assert_eq!(load.item.get_string("id"), Some(&"abc123".to_string()));

        let values = load.item.get("values").cloned().unwrap();
        let values: Value = serde_dynamo::from_attribute_value(values).unwrap();
        assert_eq!(values, json!({"x": 1, "y": [2, 3]}));
    }

    #[test]
    fn test_invalid_config_stops_before_data() {
        let config = write_temp_file("cli-bad-config.json", "not json");
        let data = std::env::temp_dir().join("load-ddb-never-read.json");

        let err = prepare(&cli(&config, &data)).unwrap_err();
        assert_eq!(err.to_string(), "config load failed");
        assert!(matches!(
            err.downcast_ref::<LoaderError>(),
            Some(LoaderError::ParseJson { .. })
        ));
    }

    #[test]
    fn test_unreadable_data_is_reported() {
        let config = write_temp_file("cli-config-ok.json", CONFIG);
        let data = std::env::temp_dir().join("load-ddb-missing-data.json");

        let err = prepare(&cli(&config, &data)).unwrap_err();
        assert_eq!(err.to_string(), "data load failed");
        assert!(matches!(
            err.downcast_ref::<LoaderError>(),
            Some(LoaderError::ReadFile { .. })
        ));
    }

    #[test]
    fn test_invalid_data_is_reported() {
        let config = write_temp_file("cli-config-ok2.json", CONFIG);
        let data = write_temp_file("cli-bad-data.json", "{\"x\":");

        let err = prepare(&cli(&config, &data)).unwrap_err();
        assert_eq!(err.to_string(), "data load failed");
    }
}

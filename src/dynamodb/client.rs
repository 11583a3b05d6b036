use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::{operation::put_item::PutItemOutput, Client};
use tracing::{error, info};

use crate::dynamodb::{Item, Table};
use crate::errors::{LoaderError, Result};

/// DynamoDB client wrapper used for the loader's single write.
///
/// A `DynamoDb` is built once per run and issues one `PutItem`; it is not
/// pooled or reused across runs.
///
/// # Error Handling
///
/// Service, network and credential failures surface as
/// [`LoaderError::PutItem`] without any retry.
#[derive(Debug)]
pub struct DynamoDb {
    client: Client,
}

impl DynamoDb {
    /// Creates a new `DynamoDb` instance.
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }

    /// Builds a client whose credentials and region come from the named
    /// shared-config profile.
    ///
    /// Profile problems are not reported here; the SDK resolves credentials
    /// lazily, so they show up as a failed request.
    pub async fn connect(profile: &str) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(profile)
            .load()
            .await;
        info!("Using AWS profile '{profile}'");
        Self::new(&sdk_config)
    }

    /// Puts an item into a DynamoDB table, replacing any item with the same key.
    pub async fn put_item(&self, table: &Table<'_>, item: Item) -> Result<PutItemOutput> {
        let output = self
            .client
            .put_item()
            .table_name(table.name())
            .set_item(Some(item.attributes))
            .send()
            .await
            .map_err(|e| {
                error!("PutItem into '{}' failed: {}", table.name(), e);
                LoaderError::PutItem {
                    table: table.name().to_string(),
                    source: e.into(),
                }
            })?;

        info!("Item written to '{}'", table.name());
        Ok(output)
    }
}

//! # DynamoDB Module
//!
//! The loader's view of DynamoDB: the target table, the record written into
//! it, and a client that performs the write.
//!
//! ## Components
//!
//! - `DynamoDb`: A client wrapper performing the single `PutItem`.
//! - `Item`: A DynamoDB item built from JSON values.
//! - `Table`: The target table's name and partition key.
//!
//! ## Credentials
//!
//! The client is built from a named profile in the shared AWS config files
//! (`~/.aws/config`, `~/.aws/credentials`). The usual environment variables
//! still apply, for example:
//!
//! - `AWS_REGION`: Overrides the profile's region.
//! - `AWS_ENDPOINT_URL`: For using a custom endpoint (e.g., DynamoDB Local).
//!
//! ## Example
//!
//! ```rust
//! use dynamodb::{DynamoDb, Item, Table};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ddb = DynamoDb::connect("dev").await;
//!     let table = Table::new("state-machine-config", "id");
//!
//!     let item = Item::record(&table, &json!("abc123"), &json!({"x": 1}))?;
//!     let output = ddb.put_item(&table, item).await?;
//!     println!("{output:?}");
//!
//!     Ok(())
//! }
//! ```

mod client;
mod item;
mod table;

pub use client::DynamoDb;
pub use item::{Item, VALUES_ATTRIBUTE};
pub use table::Table;

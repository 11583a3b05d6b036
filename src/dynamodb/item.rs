use aws_sdk_dynamodb::types::AttributeValue;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::dynamodb::Table;
use crate::errors::{LoaderError, Result};

/// Attribute holding the data file's contents in every loaded record.
pub const VALUES_ATTRIBUTE: &str = "values";

/// A DynamoDB item: attribute names mapped to attribute values.
///
/// Values are converted from anything `Serialize` through `serde_dynamo`, so a
/// JSON object becomes a map (`M`), an array a list (`L`), and scalars their
/// matching `S`, `N`, `BOOL` or `NULL` forms.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Item {
    pub(crate) attributes: HashMap<String, AttributeValue>,
}

impl Item {
    /// Creates a new empty `Item`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the record a load writes: the partition key from the config and
    /// the payload under `values`.
    ///
    /// Nothing from `payload` is promoted to a top-level attribute.
    pub fn record(table: &Table<'_>, key_value: &Value, payload: &Value) -> Result<Self> {
        Self::new()
            .set_value(table.partition_key(), key_value)?
            .set_value(VALUES_ATTRIBUTE, payload)
    }

    /// Sets an attribute to the DynamoDB form of `value`.
    pub fn set_value<T: Serialize + ?Sized>(
        mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<Self> {
        let key = key.into();
        let value: AttributeValue = serde_dynamo::to_attribute_value(value).map_err(|source| {
            LoaderError::Convert {
                attribute: key.clone(),
                source,
            }
        })?;
        self.attributes.insert(key, value);
        Ok(self)
    }

    /// Returns the raw attribute stored under `key`.
    #[allow(dead_code)]
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Gets the value of an attribute as a string.
    ///
    /// Returns `None` if the attribute doesn't exist or is not a string.
    #[allow(dead_code)]
    pub fn get_string(&self, key: &str) -> Option<&String> {
        self.attributes.get(key).and_then(|av| av.as_s().ok())
    }

    /// Returns the attribute names in the item.
    #[allow(dead_code)]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }
}

impl From<HashMap<String, AttributeValue>> for Item {
    fn from(attributes: HashMap<String, AttributeValue>) -> Self {
        Self { attributes }
    }
}

/// The DynamoDB table a load writes into.
///
/// Only the partition key matters here: the loader writes a single attribute
/// as the key, so tables with a sort key will reject its items.
///
/// # Example
///
/// ```
/// use dynamodb::Table;
///
/// let table = Table::new("state-machine-config", "id");
/// assert_eq!(table.partition_key(), "id");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table<'a> {
    name: &'a str,
    partition_key: &'a str,
}

impl<'a> Table<'a> {
    /// Creates a new `Table` instance.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the DynamoDB table.
    /// * `partition_key` - The name of the partition key attribute.
    pub fn new(name: &'a str, partition_key: &'a str) -> Self {
        Self {
            name,
            partition_key,
        }
    }

    /// Returns the name of the table.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the partition key of the table.
    pub fn partition_key(&self) -> &'a str {
        self.partition_key
    }
}

//! Data model for the record-listing API.
//!
//! Records are kept as raw JSON values. The exporter never looks inside a
//! record; it only moves records from pages into the collection in order.

use serde_derive::{Deserialize, Serialize};
use serde_json::Value;

/// One opaque item from the remote table.
pub type Record = Value;

/// One server response: a batch of records plus an optional continuation token.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Page {
    #[serde(default)]
    pub records: Vec<Record>,
    #[serde(default)]
    pub offset: Option<String>,
}

impl Page {
    /// Token for the next request, if the server says more data follows.
    ///
    /// A missing, `null` or empty token ends pagination.
    pub fn next_offset(&self) -> Option<&str> {
        self.offset.as_deref().filter(|offset| !offset.is_empty())
    }

    /// Splits the page into its records and the next continuation token.
    pub fn into_parts(self) -> (Vec<Record>, Option<String>) {
        let next = self.next_offset().map(str::to_owned);
        (self.records, next)
    }
}

/// Append-only, ordered set of records gathered over a pagination run.
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
#[serde(transparent)]
pub struct Collection(Vec<Record>);

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.0
    }

    /// Appends a page's records, keeping their order.
    pub fn append(&mut self, records: Vec<Record>) {
        self.0.extend(records);
    }
}

impl From<Vec<Record>> for Collection {
    fn from(records: Vec<Record>) -> Self {
        Self(records)
    }
}

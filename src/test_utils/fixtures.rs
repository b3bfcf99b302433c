//! Record and page fixtures.

use crate::model::{Page, Record};
use serde_json::json;
use std::ops::RangeInclusive;

/// A record shaped like an Airtable row.
pub fn record(n: usize) -> Record {
    json!({
        "id": format!("rec{:04}", n),
        "createdTime": "2025-06-01T12:00:00.000Z",
        "fields": {
            "Company Name": format!("Company {}", n),
            "Status": "Active",
            "Round Size": n * 1000,
            "Signed NDA": n % 2 == 0,
            "Geography": ["US", "EU"]
        }
    })
}

/// Records numbered over `range`, in order.
pub fn records(range: RangeInclusive<usize>) -> Vec<Record> {
    range.map(record).collect()
}

pub fn page(records: Vec<Record>, offset: Option<&str>) -> Page {
    Page {
        records,
        offset: offset.map(str::to_string),
    }
}

/// JSON body of a listing response.
pub fn page_body(records: &[Record], offset: Option<&str>) -> String {
    let body = match offset {
        Some(offset) => json!({ "records": records, "offset": offset }),
        None => json!({ "records": records }),
    };
    body.to_string()
}

use crate::error::Result;
use crate::results::Record;

/// Pretty-printed JSON array of records
pub fn to_json_string(records: &[Record]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(records)?;
    json.push('\n');
    Ok(json)
}

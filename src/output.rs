//! JSON rendering of problem records

use crate::problem::ProblemRecord;

/// Serializes a record to JSON
///
/// Keys are camelCase: `site`, `url`, `name`, `id`, `timeLimit`,
/// `memoryLimit` and `tests` (a list of `{input, output}` objects).
pub fn render_record(record: &ProblemRecord, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(record)
    } else {
        serde_json::to_string(record)
    }
}

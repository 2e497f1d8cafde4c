//! render_json.rs
//! Summary report JSON renderer.
//! Section order: issue, selectedIdea, statistics, rankings, integrity (optional).
//!
//! Section order is fixed and relies on insertion-ordered maps
//! (`serde_json/preserve_order`, enabled in this crate's manifest).

use serde::Serialize;
use serde_json::{Map as JsonMap, Value};

use crate::structure::SummaryReport;
use crate::ReportError;

/// Build the top-level report object in section order.
pub fn render_summary_json(m: &SummaryReport) -> Result<Value, ReportError> {
    let mut root = obj();

    root.insert("issue".into(), section("issue", &m.issue)?);
    // selectedIdea is always present; `null` when nothing was selected
    root.insert("selectedIdea".into(), section("selectedIdea", &m.selected_idea)?);
    root.insert("statistics".into(), section("statistics", &m.statistics)?);
    root.insert("rankings".into(), section("rankings", &m.rankings)?);

    if let Some(integrity) = &m.integrity {
        root.insert("integrity".into(), section("integrity", integrity)?);
    }

    Ok(Value::Object(root))
}

/// Pretty, newline-terminated text form for files and stdout.
pub fn render_summary_json_string(m: &SummaryReport) -> Result<String, ReportError> {
    let v = render_summary_json(m)?;
    let mut s = serde_json::to_string_pretty(&v)
        .map_err(|e| ReportError::Serialize {
            section: "root",
            msg: e.to_string(),
        })?;
    s.push('\n');
    Ok(s)
}

fn section<T: Serialize>(name: &'static str, value: &T) -> Result<Value, ReportError> {
    serde_json::to_value(value).map_err(|e| ReportError::Serialize {
        section: name,
        msg: e.to_string(),
    })
}

#[inline]
fn obj() -> JsonMap<String, Value> {
    JsonMap::new()
}

use serde::Serialize;

use super::Detection;

/// One output row: `browser, browser_version, engine, engine_version, user_agent`.
///
/// Rows are written without a header line; absent values become empty fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UaRecord {
    pub browser: String,
    pub browser_version: Option<String>,
    pub engine: Option<String>,
    pub engine_version: Option<String>,
    pub user_agent: String,
}

impl UaRecord {
    /// Number of columns in a well-formed row.
    pub const COLUMNS: usize = 5;

    /// Build a row from a detection, or `None` for bots and unparsable headers.
    pub fn from_detection(detection: &Detection<'_>, user_agent: &str) -> Option<Self> {
        if detection.is_bot() {
            return None;
        }
        let browser = detection.browser()?;
        let engine = detection.engine();
        Some(Self {
            browser: browser.name.to_string(),
            browser_version: browser.major_version.map(str::to_owned),
            engine: engine.map(|e| e.name.to_owned()),
            engine_version: engine.map(|e| e.major_version.to_owned()),
            user_agent: user_agent.to_owned(),
        })
    }
}

use fancy_regex::Regex;

use crate::error::Result;
use crate::helpers::capture_str;

/// nginx "combined" format:
///
/// `$remote_addr - $remote_user [$time_local] "$request" $status $body_bytes_sent "$http_referer" "$http_user_agent"`
///
/// The pattern is unanchored so that lines with a forwarding prefix (such
/// as Papertrail's `<timestamp> <machine> <source>:`) still match.
const COMBINED_PATTERN: &str = r#"([0-9A-Fa-f.:]+) - ([^ ]+) \[([^\]]+)\] "([^"]*)" ([0-9]+) ([0-9]+) "([^"]*)" "([^"]*)""#;

/// One parsed access-log line. Fields borrow from the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessLogEntry<'a> {
    pub remote_addr: &'a str,
    pub remote_user: &'a str,
    pub time_local: &'a str,
    pub request: &'a str,
    pub status: u16,
    pub body_bytes_sent: u64,
    pub referrer: &'a str,
    pub user_agent: &'a str,
}

impl<'a> AccessLogEntry<'a> {
    /// The User-Agent header, or `None` when nginx logged it as `-`.
    pub fn user_agent(&self) -> Option<&'a str> {
        (self.user_agent != "-").then_some(self.user_agent)
    }
}

pub struct AccessLogParser {
    combined: Regex,
}

impl AccessLogParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            combined: Regex::new(COMBINED_PATTERN)?,
        })
    }

    /// Parse one line, or `None` if it is not in combined format.
    pub fn parse_line<'a>(&self, line: &'a str) -> Option<AccessLogEntry<'a>> {
        let caps = self.combined.captures(line).ok()??;
        Some(AccessLogEntry {
            remote_addr: capture_str(&caps, 1)?,
            remote_user: capture_str(&caps, 2)?,
            time_local: capture_str(&caps, 3)?,
            request: capture_str(&caps, 4)?,
            status: capture_str(&caps, 5)?.parse().ok()?,
            body_bytes_sent: capture_str(&caps, 6)?.parse().ok()?,
            referrer: capture_str(&caps, 7)?,
            user_agent: capture_str(&caps, 8)?,
        })
    }
}

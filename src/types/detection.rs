use std::borrow::Cow;

/// Result of classifying one User-Agent header.
///
/// A bot detection carries no identities. A non-bot detection without a
/// `browser` means the header could not be tokenized at all.
#[derive(Debug, Clone)]
pub struct Detection<'a> {
    pub bot: bool,
    pub browser: Option<Browser<'a>>,
    pub engine: Option<Engine<'a>>,
}

impl<'a> Detection<'a> {
    pub fn is_bot(&self) -> bool {
        self.bot
    }
    pub fn is_unparsable(&self) -> bool {
        !self.bot && self.browser.is_none()
    }
    pub fn browser(&self) -> Option<&Browser<'a>> {
        self.browser.as_ref()
    }
    pub fn engine(&self) -> Option<&Engine<'a>> {
        self.engine.as_ref()
    }
}

/// Display identity taken from the most specific product token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Browser<'a> {
    pub name: Cow<'a, str>,
    pub major_version: Option<&'a str>,
}

impl Browser<'_> {
    pub fn major_version_or_unknown(&self) -> &str {
        self.major_version.unwrap_or("unknown")
    }
}

/// The major browser whose rendering engine the agent is equivalent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine<'a> {
    pub name: &'static str,
    pub major_version: &'a str,
}

impl<'a> Engine<'a> {
    pub fn new(name: &'static str, major_version: &'a str) -> Self {
        Self {
            name,
            major_version,
        }
    }
}

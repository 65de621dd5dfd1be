/// First dot-separated component of a version string: `"90.0.4430"` → `"90"`.
pub(crate) fn major_version(version: &str) -> &str {
    version.split('.').next().unwrap_or(version)
}

/// Parse the leading `major_minor` pair of an underscore-separated OS
/// version such as `10_12_6`.  Missing or non-numeric components yield `None`.
pub(crate) fn os_version_pair(version: &str) -> Option<(u32, u32)> {
    let mut parts = version.split('_');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    Some((major, minor))
}

/// Text of capture group `group`, borrowed from the haystack.
pub(crate) fn capture_str<'a>(captures: &fancy_regex::Captures<'a>, group: usize) -> Option<&'a str> {
    captures.get(group).map(|m| m.as_str())
}

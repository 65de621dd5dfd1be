use std::fmt;

/// One product token of a User-Agent header: `Name/Version (Comment)`.
///
/// All fields borrow from the header the token was parsed from. `name` is
/// never empty; `comment` is the text between the outermost parentheses,
/// with any nested parentheses left in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductToken<'a> {
    pub name: &'a str,
    pub version: Option<&'a str>,
    pub comment: Option<&'a str>,
}

impl<'a> ProductToken<'a> {
    pub fn new(name: &'a str, version: Option<&'a str>, comment: Option<&'a str>) -> Self {
        Self {
            name,
            version,
            comment,
        }
    }

    /// Semicolon-separated sub-terms of the comment, trimmed.
    pub fn comment_terms(&self) -> impl Iterator<Item = &'a str> {
        self.comment
            .into_iter()
            .flat_map(|c| c.split(';'))
            .map(str::trim)
    }
}

/// Formats the token back into header syntax.
impl fmt::Display for ProductToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;
        if let Some(version) = self.version {
            write!(f, "/{}", version)?;
        }
        if let Some(comment) = self.comment {
            write!(f, " ({})", comment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_full_token() {
        let t = ProductToken::new("Mozilla", Some("5.0"), Some("X11; Linux x86_64"));
        assert_eq!(t.to_string(), "Mozilla/5.0 (X11; Linux x86_64)");
    }

    #[test]
    fn display_bare_name() {
        assert_eq!(ProductToken::new("like Gecko", None, None).to_string(), "like Gecko");
    }

    #[test]
    fn comment_terms_are_trimmed() {
        let t = ProductToken::new("Mozilla", Some("5.0"), Some("compatible; Googlebot/2.1 ; x"));
        let terms: Vec<_> = t.comment_terms().collect();
        assert_eq!(terms, vec!["compatible", "Googlebot/2.1", "x"]);
    }
}

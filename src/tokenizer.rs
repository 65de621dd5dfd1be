use crate::types::ProductToken;

/// Parse an HTTP User-Agent header into its product tokens.
///
/// The header is a whitespace-delimited sequence of `Name[/Version] [(Comment)]`
/// units, e.g. `Mozilla/5.0 (FooOS; x64; BarPhone (6)) ShinyBrowser/2.0`
/// (RFC 7231 §5.5.3).  Names are runs of word characters, spaces and dots, so
/// multi-word products such as `Mobile Safari` come out as a single token.
///
/// Parsing stops at the first position where no product name starts; any
/// residue is ignored.  An empty result means the header is unparsable.
/// A comment whose parentheses never close consumes the rest of the header.
pub fn parse_user_agent(header: &str) -> Vec<ProductToken<'_>> {
    let mut rest = header.trim();
    let mut tokens = Vec::new();

    loop {
        let name_len = rest
            .find(|c: char| !is_name_char(c))
            .unwrap_or(rest.len());
        if name_len == 0 {
            break;
        }
        let name = rest[..name_len].trim_end();
        rest = &rest[name_len..];

        let mut version = None;
        if let Some(after_slash) = rest.strip_prefix('/') {
            let len = after_slash.find(' ').unwrap_or(after_slash.len());
            if len > 0 {
                version = Some(&after_slash[..len]);
                rest = &after_slash[len..];
            }
        }
        rest = rest.trim_start();

        let mut comment = None;
        if rest.starts_with('(') {
            let (inner, remainder) = split_comment(rest);
            comment = Some(inner);
            rest = remainder.trim_start();
        }

        tokens.push(ProductToken::new(name, version, comment));
    }

    tokens
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == ' ' || c == '.'
}

/// Split `(comment) rest` at the parenthesis closing the first one.
///
/// `s` must start with `(`.  Returns the comment without its outer
/// parentheses and the remainder after the closing one.
fn split_comment(s: &str) -> (&str, &str) {
    let mut depth = 0usize;
    for (pos, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return (&s[1..pos], &s[pos + 1..]);
                }
            }
            _ => {}
        }
    }
    // Unterminated.
    (&s[1..], "")
}

use crate::types::ProductToken;

/// Return true if the parsed header probably belongs to a crawler or other bot.
///
/// Bot names often live in the comment rather than in a product name
/// (`Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)`),
/// so every comment sub-term is a candidate too, cut at its first `/`.
/// Token order does not matter.
pub fn is_bot(tokens: &[ProductToken<'_>]) -> bool {
    let names = tokens.iter().map(|t| t.name);
    let comment_terms = tokens
        .iter()
        .flat_map(|t| t.comment_terms())
        .map(|term| term.split('/').next().unwrap_or(term));

    // "Googlebot", "FooBot"
    if names.chain(comment_terms).any(ends_with_bot) {
        return true;
    }

    // "Pingdom_bot_1.0"
    tokens.iter().any(|t| contains_delimited_bot(t.name))
}

fn ends_with_bot(term: &str) -> bool {
    let bytes = term.as_bytes();
    bytes.len() >= 3 && bytes[bytes.len() - 3..].eq_ignore_ascii_case(b"bot")
}

/// `bot` with a non-letter on both sides.
fn contains_delimited_bot(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.windows(5).any(|w| {
        w[1..4].eq_ignore_ascii_case(b"bot")
            && !w[0].is_ascii_alphabetic()
            && !w[4].is_ascii_alphabetic()
    })
}

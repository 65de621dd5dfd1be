use crate::types::ProductToken;

/// Product names that appear in many unrelated user agents, most generic first.
pub const GENERIC_PRODUCT_NAMES: &[&str] = &[
    // Nearly every browser starts with "Mozilla/5.0".
    "Mozilla",
    // Every Firefox UA carries "Gecko/<Version>"; others say "like Gecko"
    // inside a comment.
    "Gecko",
    // Added by most modern browsers for mobile web compatibility. Outside
    // Safari the version is usually fixed at 537.36, and recent Safari
    // freezes AppleWebKit at 605.1.15.
    "AppleWebKit",
    "Safari",
    "Mobile Safari",
    // Embedded iOS web views send `Mobile/15E148` and similar.
    "Mobile",
    // Chromium derivatives and a few non-Chromium browsers.
    "Chrome",
];

/// Sort key: `None` for names outside the table, which sort first.
fn genericness(name: &str) -> Option<usize> {
    GENERIC_PRODUCT_NAMES
        .iter()
        .position(|&generic| generic == name)
        .map(|idx| GENERIC_PRODUCT_NAMES.len() - idx)
}

/// Reorder tokens from most to least specific.
///
/// Unknown product names come first, in header order; the generic names
/// follow with `Mozilla` last.  The first token typically identifies the
/// browser and the rest form a chain of increasingly generic fallbacks.
pub fn rank_tokens<'a>(tokens: &[ProductToken<'a>]) -> Vec<ProductToken<'a>> {
    let mut ranked = tokens.to_vec();
    // `Option` orders `None` before any `Some`; `sort_by_key` is stable.
    ranked.sort_by_key(|t| genericness(t.name));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::parse_user_agent;

    fn names<'a>(tokens: &[ProductToken<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.name).collect()
    }

    #[test]
    fn chrome_fallback_chain() {
        let tokens = parse_user_agent(
            "Mozilla/5.0 (Windows NT 10.0) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0 Safari/537.36",
        );
        assert_eq!(
            names(&rank_tokens(&tokens)),
            vec!["Chrome", "Safari", "AppleWebKit", "Mozilla"]
        );
    }

    #[test]
    fn specific_product_first() {
        let tokens = parse_user_agent(
            "Mozilla/5.0 (X11) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0 Safari/537.36 ShinyBrowser/2.0",
        );
        assert_eq!(names(&rank_tokens(&tokens))[0], "ShinyBrowser");
    }

    #[test]
    fn unknown_names_keep_header_order() {
        let tokens = parse_user_agent("Mozilla/5.0 Alpha/1 Chrome/90 Beta/2 Gamma/3");
        assert_eq!(
            names(&rank_tokens(&tokens)),
            vec!["Alpha", "Beta", "Gamma", "Chrome", "Mozilla"]
        );
    }

    #[test]
    fn parse_order_is_untouched() {
        let tokens = parse_user_agent("Mozilla/5.0 Gecko/20100101 Firefox/88.0");
        let ranked = rank_tokens(&tokens);
        assert_eq!(names(&tokens), vec!["Mozilla", "Gecko", "Firefox"]);
        assert_eq!(names(&ranked), vec!["Firefox", "Gecko", "Mozilla"]);
    }

    #[test]
    fn empty_input() {
        assert!(rank_tokens(&[]).is_empty());
    }
}

use crate::error::Result;
use crate::helpers::{capture_str, major_version, os_version_pair};
use crate::types::{Engine, ProductToken};
use fancy_regex::Regex;

pub const EDGE_LEGACY: &str = "Edge (Legacy)";
pub const FIREFOX: &str = "Firefox";
pub const CHROME: &str = "Chrome";
pub const SAFARI: &str = "Safari";
pub const INTERNET_EXPLORER: &str = "Internet Explorer";

/// Product names that identify a Chromium-based engine directly.
const CHROME_FAMILY: &[&str] = &["Chrome", "Brave Chrome", "like Chrome", "HeadlessChrome"];

/// Safari version assumed for macOS releases after 10.14. Big Sur and later
/// ship at least Safari 14 and no newer mapping is maintained.
const SAFARI_FOR_LATER_MACOS: &str = "14";

/// Regexes run against the platform comment of the `Mozilla/5.0` token.
/// Compiled once when the resolver is built.
struct PlatformPatterns {
    ios: Regex,
    macos: Regex,
    trident: Regex,
}

impl PlatformPatterns {
    fn compile() -> Result<Self> {
        Ok(Self {
            ios: Regex::new(r"(?:iPhone|CPU) OS ([0-9_]+)")?,
            macos: Regex::new(r"Mac OS X ([0-9]+_[0-9_]+)")?,
            trident: Regex::new(r"Trident/7\.0; rv:([0-9.]+)")?,
        })
    }
}

type ResolveFn = for<'a> fn(&PlatformPatterns, &[ProductToken<'a>]) -> Option<Engine<'a>>;

/// One step of engine inference: `resolve` returns `None` when the rule
/// does not apply, letting the next rule run.
pub struct EngineRule {
    pub name: &'static str,
    resolve: ResolveFn,
}

/// Inference rules in precedence order. The first rule that yields wins.
static ENGINE_RULES: &[EngineRule] = &[
    // EdgeHTML Edge sends Chrome and Safari tokens too, so it has to be
    // recognised before the Chrome family.  Chromium Edge uses `Edg`.
    EngineRule {
        name: "edge-legacy",
        resolve: edge_legacy,
    },
    EngineRule {
        name: "firefox",
        resolve: firefox,
    },
    EngineRule {
        name: "chrome-family",
        resolve: chrome_family,
    },
    // Safari puts the user-facing version in `Version/x`; `Safari/x` is the
    // WebKit build.
    EngineRule {
        name: "safari-version",
        resolve: safari_version,
    },
    // No product token names the engine: fall back to the platform comment.
    EngineRule {
        name: "ios-platform",
        resolve: ios_platform,
    },
    EngineRule {
        name: "macos-platform",
        resolve: macos_platform,
    },
    EngineRule {
        name: "trident-platform",
        resolve: trident_platform,
    },
];

/// Maps ranked product tokens onto the major browser whose engine they
/// share, e.g. Chromium derivatives onto Chrome and iOS browsers onto Safari.
/// The result can be checked against MDN or caniuse.com compatibility data.
pub struct EngineResolver {
    patterns: PlatformPatterns,
}

impl EngineResolver {
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: PlatformPatterns::compile()?,
        })
    }

    pub fn rules() -> &'static [EngineRule] {
        ENGINE_RULES
    }

    /// Resolve the equivalent engine, or `None` when no rule applies.
    pub fn resolve<'a>(&self, ranked: &[ProductToken<'a>]) -> Option<Engine<'a>> {
        ENGINE_RULES.iter().find_map(|rule| {
            let engine = (rule.resolve)(&self.patterns, ranked)?;
            tracing::trace!(rule = rule.name, engine = engine.name, "engine resolved");
            Some(engine)
        })
    }

    /// Apply a single rule in isolation.
    pub fn apply<'a>(&self, rule: &EngineRule, ranked: &[ProductToken<'a>]) -> Option<Engine<'a>> {
        (rule.resolve)(&self.patterns, ranked)
    }
}

/// Major version of the first token named one of `names` that carries a version.
fn find_major<'a>(tokens: &[ProductToken<'a>], names: &[&str]) -> Option<&'a str> {
    tokens
        .iter()
        .filter(|t| names.contains(&t.name))
        .find_map(|t| t.version)
        .map(major_version)
}

fn platform_comment<'a>(tokens: &[ProductToken<'a>]) -> Option<&'a str> {
    tokens.iter().find(|t| t.name == "Mozilla")?.comment
}

fn edge_legacy<'a>(_: &PlatformPatterns, tokens: &[ProductToken<'a>]) -> Option<Engine<'a>> {
    find_major(tokens, &["Edge"]).map(|v| Engine::new(EDGE_LEGACY, v))
}

fn firefox<'a>(_: &PlatformPatterns, tokens: &[ProductToken<'a>]) -> Option<Engine<'a>> {
    find_major(tokens, &["Firefox"]).map(|v| Engine::new(FIREFOX, v))
}

fn chrome_family<'a>(_: &PlatformPatterns, tokens: &[ProductToken<'a>]) -> Option<Engine<'a>> {
    find_major(tokens, CHROME_FAMILY).map(|v| Engine::new(CHROME, v))
}

fn safari_version<'a>(_: &PlatformPatterns, tokens: &[ProductToken<'a>]) -> Option<Engine<'a>> {
    find_major(tokens, &["Version"]).map(|v| Engine::new(SAFARI, v))
}

/// Every iOS web view runs the WebKit release of Safari for that iOS version.
fn ios_platform<'a>(p: &PlatformPatterns, tokens: &[ProductToken<'a>]) -> Option<Engine<'a>> {
    let comment = platform_comment(tokens)?;
    let caps = p.ios.captures(comment).ok()??;
    let ios_major = capture_str(&caps, 1)?.split('_').next()?;
    if ios_major.is_empty() {
        return None;
    }
    Some(Engine::new(SAFARI, ios_major))
}

/// iOS "Request Desktop Site" presents a macOS user agent with a frozen OS
/// version (https://bugs.webkit.org/show_bug.cgi?id=196275).  For 10.10
/// through 10.14 the minor version equals the Safari major version.
fn macos_platform<'a>(p: &PlatformPatterns, tokens: &[ProductToken<'a>]) -> Option<Engine<'a>> {
    let comment = platform_comment(tokens)?;
    let caps = p.macos.captures(comment).ok()??;
    let version = capture_str(&caps, 1)?;
    let macos = os_version_pair(version)?;

    if macos >= (10, 10) && macos <= (10, 14) {
        let minor = version.split('_').nth(1)?;
        Some(Engine::new(SAFARI, minor))
    } else if macos > (10, 14) {
        Some(Engine::new(SAFARI, SAFARI_FOR_LATER_MACOS))
    } else {
        None
    }
}

/// IE11 only reports its version inside the platform comment.
fn trident_platform<'a>(p: &PlatformPatterns, tokens: &[ProductToken<'a>]) -> Option<Engine<'a>> {
    let comment = platform_comment(tokens)?;
    let caps = p.trident.captures(comment).ok()??;
    let version = capture_str(&caps, 1)?;
    Some(Engine::new(INTERNET_EXPLORER, major_version(version)))
}

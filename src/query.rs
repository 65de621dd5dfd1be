use std::fmt;
use std::str::FromStr;

use fancy_regex::Regex;

use crate::error::{Error, Result};
use crate::helpers::capture_str;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Lt,
    Le,
    Eq,
    Ge,
    Gt,
}

impl Relation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Eq => "==",
            Self::Ge => ">=",
            Self::Gt => ">",
        }
    }

    pub fn holds(&self, lhs: u32, rhs: u32) -> bool {
        match self {
            Self::Lt => lhs < rhs,
            Self::Le => lhs <= rhs,
            Self::Eq => lhs == rhs,
            Self::Ge => lhs >= rhs,
            Self::Gt => lhs > rhs,
        }
    }
}

impl FromStr for Relation {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        match s {
            "<" => Ok(Self::Lt),
            "<=" => Ok(Self::Le),
            "==" => Ok(Self::Eq),
            ">=" => Ok(Self::Ge),
            ">" => Ok(Self::Gt),
            _ => Err(()),
        }
    }
}

/// One `engine<relation>version` term, e.g. `chrome>=90`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTerm {
    pub engine: String,
    pub relation: Relation,
    pub version: u32,
}

impl VersionTerm {
    /// Engine names compare case-insensitively.
    pub fn matches(&self, engine: &str, version: u32) -> bool {
        self.engine.eq_ignore_ascii_case(engine) && self.relation.holds(version, self.version)
    }
}

impl fmt::Display for VersionTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.engine, self.relation.as_str(), self.version)
    }
}

/// A disjunction of version terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionQuery {
    terms: Vec<VersionTerm>,
}

impl VersionQuery {
    /// Parse `"{engine}{relation}{version}, ..."`.
    ///
    /// Fails on the first term that does not parse, naming that term.
    pub fn parse(query: &str) -> Result<Self> {
        let term_re = Regex::new(r"^(\w+)\s*(<=|>=|==|<|>)\s*(\d+)")?;
        let terms = query
            .split(',')
            .map(|term| parse_term(&term_re, term.trim()).ok_or_else(|| Error::Query(term.to_owned())))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { terms })
    }

    pub fn terms(&self) -> &[VersionTerm] {
        &self.terms
    }

    /// True if any term matches.
    pub fn matches(&self, engine: &str, version: u32) -> bool {
        self.terms.iter().any(|t| t.matches(engine, version))
    }
}

fn parse_term(term_re: &Regex, term: &str) -> Option<VersionTerm> {
    let caps = term_re.captures(term).ok()??;
    Some(VersionTerm {
        engine: capture_str(&caps, 1)?.to_owned(),
        relation: capture_str(&caps, 2)?.parse().ok()?,
        version: capture_str(&caps, 3)?.parse().ok()?,
    })
}

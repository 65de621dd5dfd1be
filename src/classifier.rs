use std::borrow::Cow;
use std::io::{BufRead, Write};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::access_log::AccessLogParser;
use crate::bot::is_bot;
use crate::config::Config;
use crate::engine::EngineResolver;
use crate::error::Result;
use crate::identity::AliasTable;
use crate::ranking::rank_tokens;
use crate::tokenizer::parse_user_agent;
use crate::types::*;

/// Lines classified per parallel batch when streaming a log.
const CHUNK_LINES: usize = 8192;

/// What became of one access-log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Record(UaRecord),
    /// Not in combined log format.
    Malformed,
    /// The User-Agent field was `-`.
    NoUserAgent,
    Bot,
    /// The header produced no product tokens.
    Unparsable(String),
}

/// Counters for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub lines: usize,
    pub records: usize,
    pub malformed: usize,
    pub no_user_agent: usize,
    pub bots: usize,
    pub unparsable: usize,
}

pub struct UaClassifier {
    engine_resolver: EngineResolver,
    aliases: AliasTable,
    access_log: AccessLogParser,
}

impl UaClassifier {
    pub fn new() -> Result<Self> {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Result<Self> {
        Ok(Self {
            engine_resolver: EngineResolver::new()?,
            aliases: AliasTable::with_overrides(config.aliases.clone()),
            access_log: AccessLogParser::new()?,
        })
    }

    /// Classify a User-Agent header.
    ///
    /// The returned `Detection` borrows from both `self` (alias table) and `ua`.
    pub fn parse<'a>(&'a self, ua: &'a str) -> Detection<'a> {
        let tokens = parse_user_agent(ua);
        if is_bot(&tokens) {
            return Detection {
                bot: true,
                browser: None,
                engine: None,
            };
        }

        let ranked = rank_tokens(&tokens);
        Detection {
            bot: false,
            browser: self.aliases.map_identity(&ranked),
            engine: self.engine_resolver.resolve(&ranked),
        }
    }

    /// Extract the User-Agent from an access-log line and classify it.
    pub fn classify_line(&self, line: &str) -> LineOutcome {
        let Some(entry) = self.access_log.parse_line(line) else {
            return LineOutcome::Malformed;
        };
        let Some(ua) = entry.user_agent() else {
            return LineOutcome::NoUserAgent;
        };

        let detection = self.parse(ua);
        if detection.is_bot() {
            return LineOutcome::Bot;
        }
        match UaRecord::from_detection(&detection, ua) {
            Some(record) => LineOutcome::Record(record),
            None => LineOutcome::Unparsable(ua.to_owned()),
        }
    }

    /// Classify lines in parallel. Outcomes keep the order of `lines`.
    pub fn classify_lines<S: AsRef<str> + Sync>(&self, lines: &[S]) -> Vec<LineOutcome> {
        lines
            .par_iter()
            .map(|line| self.classify_line(line.as_ref().trim()))
            .collect()
    }

    /// Read an access log from `input` and write one headerless CSV record
    /// per browser request to `output`.
    ///
    /// Malformed lines and unparsable headers are reported as warnings and
    /// skipped; the run continues. Invalid UTF-8 is replaced with U+FFFD.
    pub fn write_records<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<BatchStats> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(output);
        let mut stats = BatchStats::default();
        let mut lines = input.split(b'\n');

        loop {
            let raw = lines
                .by_ref()
                .take(CHUNK_LINES)
                .collect::<std::io::Result<Vec<Vec<u8>>>>()?;
            if raw.is_empty() {
                break;
            }

            let chunk: Vec<Cow<'_, str>> = raw
                .iter()
                .enumerate()
                .map(|(idx, bytes)| {
                    let line = String::from_utf8_lossy(bytes);
                    if let Cow::Owned(_) = line {
                        debug!(line = stats.lines + idx + 1, "replaced invalid UTF-8");
                    }
                    line
                })
                .collect();

            for outcome in self.classify_lines(&chunk) {
                stats.lines += 1;
                match outcome {
                    LineOutcome::Record(record) => {
                        stats.records += 1;
                        writer.serialize(record)?;
                    }
                    LineOutcome::Malformed => {
                        stats.malformed += 1;
                        warn!(line = stats.lines, "skipping malformed log line");
                    }
                    LineOutcome::NoUserAgent => {
                        stats.no_user_agent += 1;
                    }
                    LineOutcome::Bot => {
                        stats.bots += 1;
                        debug!(line = stats.lines, "skipping bot");
                    }
                    LineOutcome::Unparsable(ua) => {
                        stats.unparsable += 1;
                        warn!("Failed to parse user agent: {}", ua);
                    }
                }
            }
        }

        writer.flush()?;
        info!(
            lines = stats.lines,
            records = stats.records,
            malformed = stats.malformed,
            no_user_agent = stats.no_user_agent,
            bots = stats.bots,
            unparsable = stats.unparsable,
            "access log processed"
        );
        Ok(stats)
    }
}

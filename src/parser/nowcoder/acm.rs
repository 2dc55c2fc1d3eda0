//! Contest layout extraction
//!
//! Limits live in `.subject-item-wrap` spans whose text is a list of
//! per-language limits separated by a full-width comma, e.g.
//! `时间限制：C/C++ 1秒，其他语言2秒`. The last entry wins.

use super::{capture_number, problem_id};
use crate::parser::dom::{Document, ElementExt, Query};
use crate::problem::ProblemBuilder;
use crate::{ParseError, ParseResult};
use once_cell::sync::Lazy;
use regex::Regex;

static TITLE: Lazy<Query> = Lazy::new(|| Query::new(".terminal-topic-title"));
static TIME_LIMIT: Lazy<Query> =
    Lazy::new(|| Query::new(".question-intr > .subject-item-wrap > span"));
static MEMORY_LIMIT: Lazy<Query> =
    Lazy::new(|| Query::new(".question-intr > .subject-item-wrap > span:nth-of-type(2)"));
static SAMPLES: Lazy<Query> = Lazy::new(|| Query::new(".question-oi-bd"));
static SAMPLE_BLOCK: Lazy<Query> = Lazy::new(|| Query::new("pre"));

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)").expect("valid regex"));

const FIELD_SEPARATOR: char = '，';

pub(super) fn extract(
    document: &Document,
    url: &str,
    builder: ProblemBuilder,
) -> ParseResult<ProblemBuilder> {
    let title = document.select_one(&TITLE)?.text_content();
    let id = problem_id(url);

    let time_text = document.select_one(&TIME_LIMIT)?.text_content();
    let seconds = last_entry_number(&time_text, "time limit")?;
    let millis = seconds
        .checked_mul(1000)
        .ok_or_else(|| ParseError::Format {
            field: "time limit",
            text: time_text.clone(),
        })?;

    let memory_text = document.select_one(&MEMORY_LIMIT)?.text_content();
    let megabytes = last_entry_number(&memory_text, "memory limit")?;

    tracing::trace!(
        "Contest page {}: time {}ms, memory {}MB",
        id,
        millis,
        megabytes
    );

    let mut builder = builder
        .name(title.trim(), id)
        .time_limit(millis)
        .memory_limit(megabytes as f64);

    let containers = document.select_all(&SAMPLES);
    for (index, container) in containers.iter().enumerate() {
        match container.select_all(&SAMPLE_BLOCK).as_slice() {
            [input, output, ..] => {
                builder = builder.test(input.text_content(), output.text_content());
            }
            _ => return Err(ParseError::MissingTestBlock { index }),
        }
    }

    tracing::debug!("Extracted {} sample tests", containers.len());
    Ok(builder)
}

/// Reads the first number in the entry after the last full-width comma
fn last_entry_number(text: &str, field: &'static str) -> ParseResult<u64> {
    // rsplit always yields at least one item
    let last = text.rsplit(FIELD_SEPARATOR).next().unwrap_or(text);
    capture_number(&DIGITS, last, field)
}

//! PAT exercise layout extraction
//!
//! Samples are not wrapped in a dedicated container. Each one follows an
//! `<h3><b>输入例子:</b></h3>` style heading, and headings alternate
//! between input and output.

use super::{capture_number, problem_id};
use crate::parser::dom::{Document, ElementExt, Query};
use crate::problem::ProblemBuilder;
use crate::{ParseError, ParseResult};
use once_cell::sync::Lazy;
use regex::Regex;

static TITLE: Lazy<Query> = Lazy::new(|| Query::new(".pat-content h3"));
static DETAIL_INFO: Lazy<Query> = Lazy::new(|| Query::new(".pat-content .pat-detail-info"));
static SAMPLE_LABELS: Lazy<Query> = Lazy::new(|| Query::new(".module-body h3 > b"));

static TIME_MS: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+) ms").expect("valid regex"));
static MEMORY_KB: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+) KB").expect("valid regex"));

/// Label text that marks a sample heading
const SAMPLE_MARKER: &str = "子:";

pub(super) fn extract(
    document: &Document,
    url: &str,
    builder: ProblemBuilder,
) -> ParseResult<ProblemBuilder> {
    let heading = document.select_one(&TITLE)?.text_content();
    let heading = heading.trim();
    let title = heading
        .split_once(" (")
        .map_or(heading, |(title, _)| title)
        .trim();

    let limits = document.select_one(&DETAIL_INFO)?.text_content();
    let millis = capture_number(&TIME_MS, &limits, "time limit")?;
    let kilobytes = capture_number(&MEMORY_KB, &limits, "memory limit")?;

    // The identifier goes first on this layout
    let mut builder = builder
        .name(problem_id(url), title)
        .time_limit(millis)
        .memory_limit(kilobytes as f64 / 1024.0);

    let blocks: Vec<_> = document
        .select_all(&SAMPLE_LABELS)
        .into_iter()
        .filter(|label| label.text_content().contains(SAMPLE_MARKER))
        .map(|label| {
            label
                .parent_element()
                .and_then(|heading| heading.next_element_sibling())
        })
        .collect();

    if blocks.len() % 2 != 0 {
        tracing::warn!(
            "Discarding unpaired sample block {} on {}",
            blocks.len() - 1,
            url
        );
    }

    for (pair, chunk) in blocks.chunks_exact(2).enumerate() {
        let input = chunk[0].ok_or(ParseError::MissingTestBlock { index: pair * 2 })?;
        let output = chunk[1].ok_or(ParseError::MissingTestBlock {
            index: pair * 2 + 1,
        })?;
        builder = builder.test(input.inner_html(), output.inner_html());
    }

    tracing::debug!("Extracted {} sample tests", blocks.len() / 2);
    Ok(builder)
}

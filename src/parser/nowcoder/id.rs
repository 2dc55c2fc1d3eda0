use once_cell::sync::Lazy;
use regex::Regex;

/// Identifier used when the URL carries no recognizable problem id
pub const UNKNOWN_ID: &str = "Unknown Id";

static CONTEST_PROBLEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/contest/([0-9]+)/([A-Z])").expect("valid regex"));

static PROBLEM_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"problem/([0-9]+)").expect("valid regex"));

/// Derives the problem identifier from a URL
///
/// Checked in order:
/// 1. `/contest/<id>/<letter>` gives `"<id>-<letter>"`
/// 2. `problem/<digits>` gives the digits
/// 3. Otherwise [`UNKNOWN_ID`]
///
/// # Examples
///
/// ```
/// use nowcoder_problem::parser::{problem_id, UNKNOWN_ID};
///
/// assert_eq!(problem_id("https://ac.nowcoder.com/acm/contest/99458/A"), "99458-A");
/// assert_eq!(problem_id("https://ac.nowcoder.com/acm/problem/12345"), "12345");
/// assert_eq!(problem_id("https://ac.nowcoder.com/acm/home"), UNKNOWN_ID);
/// ```
pub fn problem_id(url: &str) -> String {
    if let Some(caps) = CONTEST_PROBLEM.captures(url) {
        return format!("{}-{}", &caps[1], &caps[2]);
    }

    if let Some(caps) = PROBLEM_NUMBER.captures(url) {
        return caps[1].to_string();
    }

    UNKNOWN_ID.to_string()
}

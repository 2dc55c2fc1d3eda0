/// Checks if a URL matches a glob pattern
///
/// A `*` in the pattern matches any substring, including the empty one.
/// Every literal segment between wildcards must appear in order, and the
/// pattern is anchored at both ends:
/// - `https://a.com/problem/*` matches `https://a.com/problem/12`
/// - `https://a.com/*/x` matches `https://a.com/q/r/x`
/// - a pattern without `*` matches only the identical string
///
/// # Arguments
///
/// * `pattern` - The glob pattern
/// * `candidate` - The URL to check against the pattern
///
/// # Examples
///
/// ```
/// use nowcoder_problem::parser::matches_glob;
///
/// assert!(matches_glob(
///     "https://ac.nowcoder.com/acm/contest/*/*",
///     "https://ac.nowcoder.com/acm/contest/99458/A"
/// ));
/// assert!(!matches_glob(
///     "https://ac.nowcoder.com/acm/problem/*",
///     "https://ac.nowcoder.com/pat/5/problem/4021"
/// ));
/// ```
pub fn matches_glob(pattern: &str, candidate: &str) -> bool {
    let mut segments = pattern.split('*');

    // split always yields at least one segment
    let head = segments.next().unwrap_or_default();
    let Some(mut rest) = candidate.strip_prefix(head) else {
        return false;
    };

    let segments: Vec<&str> = segments.collect();
    let Some((tail, middle)) = segments.split_last() else {
        // No wildcard: exact match only
        return rest.is_empty();
    };

    for segment in middle {
        match rest.find(segment) {
            Some(pos) => rest = &rest[pos + segment.len()..],
            None => return false,
        }
    }

    rest.ends_with(tail)
}

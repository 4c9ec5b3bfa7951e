//! Candidate repository roots for a nested path.

/// Segment count of the shortest candidate (`namespace/project`).
pub const MIN_ROOT_SEGMENTS: usize = 2;

/// Build the candidate list for a normalized `path`, most specific first.
///
/// `path` is slash-separated with no empty segments. Every candidate is a
/// prefix of it: the full path first, one trailing segment dropped per step,
/// ending with the first two segments. Returns an empty list for fewer than
/// two segments.
///
/// `"a/b/c/d"` yields `["a/b/c/d", "a/b/c", "a/b"]`.
pub fn candidate_paths(path: &str) -> Vec<&str> {
    if path.matches('/').count() + 1 < MIN_ROOT_SEGMENTS {
        return Vec::new();
    }

    // Separators past the first close a candidate shorter than the full path.
    let mut ends: Vec<usize> = path
        .match_indices('/')
        .map(|(index, _)| index)
        .skip(MIN_ROOT_SEGMENTS - 1)
        .collect();
    ends.push(path.len());

    ends.into_iter().rev().map(|end| &path[..end]).collect()
}

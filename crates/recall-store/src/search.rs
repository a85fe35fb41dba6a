use recall_core::SearchMatch;

/// Knobs for keyword search.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Maximum matching lines kept per transcript.
    pub max_matches_per_file: usize,
    /// Characters of each matching line kept in the result.
    pub snippet_chars: usize,
    pub case_sensitive: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_matches_per_file: 10,
            snippet_chars: 200,
            case_sensitive: false,
        }
    }
}

/// Substring matcher with optional case folding.
pub(crate) struct Matcher {
    needle: String,
    case_sensitive: bool,
}

impl Matcher {
    pub(crate) fn new(query: &str, case_sensitive: bool) -> Self {
        let needle = if case_sensitive {
            query.to_string()
        } else {
            query.to_lowercase()
        };
        Self {
            needle,
            case_sensitive,
        }
    }

    pub(crate) fn is_match(&self, haystack: &str) -> bool {
        if self.case_sensitive {
            haystack.contains(&self.needle)
        } else {
            haystack.to_lowercase().contains(&self.needle)
        }
    }
}

/// Scan `content` line by line. Returns `None` when nothing matches, otherwise
/// the first `max_matches_per_file` matching lines (possibly none when the cap is 0).
pub(crate) fn match_lines(
    content: &str,
    matcher: &Matcher,
    options: &SearchOptions,
) -> Option<Vec<SearchMatch>> {
    let mut found = false;
    let mut matches = Vec::new();

    for (i, line) in content.split('\n').enumerate() {
        if !matcher.is_match(line) {
            continue;
        }
        found = true;
        if matches.len() >= options.max_matches_per_file {
            break;
        }
        matches.push(SearchMatch {
            line: i + 1,
            text: line.chars().take(options.snippet_chars).collect(),
        });
    }

    found.then_some(matches)
}

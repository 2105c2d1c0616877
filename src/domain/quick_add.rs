//! Quick-add suggestions derived from repeated entry content

use crate::domain::Entry;
use std::collections::HashMap;

/// Default number of times a content value must appear to be suggested
pub const DEFAULT_MIN_COUNT: usize = 2;

/// Default maximum number of suggestions
pub const DEFAULT_LIMIT: usize = 5;

/// A content value offered for one-step re-entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickAdd {
    pub content: String,
    pub count: usize,
}

/// Thresholds applied by [`suggest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestOptions {
    pub min_count: usize,
    pub limit: usize,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        SuggestOptions {
            min_count: DEFAULT_MIN_COUNT,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Most frequently repeated contents, highest count first.
///
/// Matching is exact and case-sensitive. Values with equal counts keep the
/// order in which they were first encountered.
pub fn suggest(entries: &[Entry], options: SuggestOptions) -> Vec<QuickAdd> {
    suggest_contents(entries.iter().map(|e| e.content.as_str()), options)
}

/// Same as [`suggest`], over bare content values
pub fn suggest_contents<'a, I>(contents: I, options: SuggestOptions) -> Vec<QuickAdd>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for content in contents {
        match positions.get(content) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(content, counts.len());
                counts.push((content, 1));
            }
        }
    }

    counts.retain(|(_, count)| *count >= options.min_count);
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(options.limit)
        .map(|(content, count)| QuickAdd {
            content: content.to_string(),
            count,
        })
        .collect()
}

//! Group rule evaluation.
//!
//! [`RecordMatcher`] is the seam the filter pipeline depends on. The keyword
//! rule users create today is [`KeywordMatcher`]; other rule kinds only need
//! to implement the trait.

use pulse_core::{ContentRecord, Group};
use regex::Regex;

/// Decides whether a record belongs to a virtual view.
pub trait RecordMatcher {
    fn matches(&self, record: &ContentRecord) -> bool;
}

/// Compiled form of a group's keyword rule.
///
/// Keywords are case folded and trimmed once at construction; blank keywords
/// are dropped. Exclusions are always plain substring checks and win over any
/// inclusion match.
#[derive(Debug)]
pub struct KeywordMatcher {
    exclude: Vec<String>,
    include: Inclusion,
}

#[derive(Debug)]
enum Inclusion {
    Substring(Vec<String>),
    WholeWord(Vec<Regex>),
}

impl KeywordMatcher {
    #[must_use]
    pub fn new(group: &Group) -> Self {
        let include = fold_keywords(&group.keywords);
        let exclude = fold_keywords(&group.exclude_keywords);

        let include = if group.exact_match {
            Inclusion::WholeWord(
                include
                    .iter()
                    .filter_map(|k| whole_word_pattern(&group.name, k))
                    .collect(),
            )
        } else {
            Inclusion::Substring(include)
        };

        Self { exclude, include }
    }

    /// Evaluate the rule against already lowercased searchable text.
    #[must_use]
    pub fn matches_text(&self, text: &str) -> bool {
        if self.exclude.iter().any(|k| text.contains(k.as_str())) {
            return false;
        }

        // An empty keyword list matches nothing.
        match &self.include {
            Inclusion::Substring(keywords) => keywords.iter().any(|k| text.contains(k.as_str())),
            Inclusion::WholeWord(patterns) => patterns.iter().any(|re| re.is_match(text)),
        }
    }
}

impl RecordMatcher for KeywordMatcher {
    fn matches(&self, record: &ContentRecord) -> bool {
        self.matches_text(&record.search_text())
    }
}

/// One-off evaluation of `group` against `record`.
///
/// Compiles the group on every call; use [`KeywordMatcher`] directly when
/// testing many records against the same group.
#[must_use]
pub fn matches(record: &ContentRecord, group: &Group) -> bool {
    KeywordMatcher::new(group).matches(record)
}

fn fold_keywords(keywords: &[String]) -> Vec<String> {
    keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Literal keyword bounded on each side by a non-word character or the text edge.
///
/// A plain `\b` would never match keywords that start or end with a non-word
/// character such as `c++`, so the boundary is spelled out explicitly.
fn whole_word_pattern(group_name: &str, keyword: &str) -> Option<Regex> {
    let pattern = format!(r"(?i)(?:^|\W){}(?:\W|$)", regex::escape(keyword));
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(
                group = group_name,
                keyword,
                error = %e,
                "keyword could not be compiled for whole-word matching; ignoring it"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pulse_core::{Metrics, Sentiment};

    use super::*;

    fn group(keywords: &[&str], exclude: &[&str], exact_match: bool) -> Group {
        Group {
            name: "Test".to_string(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            exclude_keywords: exclude.iter().map(|k| (*k).to_string()).collect(),
            exact_match,
        }
    }

    fn record(caption: &str, hashtags: &[&str]) -> ContentRecord {
        ContentRecord {
            id: "1".to_string(),
            caption: caption.to_string(),
            author: "@someone".to_string(),
            author_avatar: String::new(),
            metrics: Metrics::default(),
            sentiment: Sentiment::Neutral,
            sentiment_score: 0.5,
            created_at: "2026-02-05 10:00".to_string(),
            hashtags: hashtags.iter().map(|t| (*t).to_string()).collect(),
            thumbnail_url: String::new(),
        }
    }

    #[test]
    fn substring_mode_matches_inside_words() {
        let g = group(&["car"], &[], false);
        assert!(matches(&record("nice carpet", &[]), &g));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let g = group(&["  CAR "], &[], false);
        assert!(matches(&record("My Car", &[]), &g));
    }

    #[test]
    fn hashtags_are_searchable() {
        let g = group(&["roadtrip"], &[], true);
        assert!(matches(&record("weekend plans", &["roadtrip"]), &g));
    }

    #[test]
    fn exclusion_wins_over_inclusion() {
        let g = group(&["car"], &["car"], false);
        assert!(!matches(&record("I love my car", &[]), &g));
    }

    #[test]
    fn exclusion_is_substring_even_in_exact_mode() {
        let g = group(&["car"], &["sponsor"], true);
        assert!(!matches(&record("my car #sponsored", &[]), &g));
    }

    #[test]
    fn exclusion_checks_hashtags() {
        let g = group(&["car"], &["ad"], false);
        assert!(!matches(&record("my car", &["ad"]), &g));
    }

    #[test]
    fn exact_match_rejects_partial_word() {
        let g = group(&["car"], &[], true);
        assert!(!matches(&record("carpet", &[]), &g));
        assert!(!matches(&record("scar", &[]), &g));
    }

    #[test]
    fn exact_match_accepts_whole_word() {
        let g = group(&["car"], &[], true);
        assert!(matches(&record("I love my car", &[]), &g));
        assert!(matches(&record("car!", &[]), &g));
        assert!(matches(&record("(car)", &[]), &g));
    }

    #[test]
    fn exact_match_multi_word_keyword() {
        let g = group(&["electric car"], &[], true);
        assert!(matches(&record("an electric car review", &[]), &g));
        assert!(!matches(&record("an electric carpet", &[]), &g));
    }

    #[test]
    fn metacharacters_are_literal() {
        let g = group(&["c++"], &[], true);
        assert!(matches(&record("learning c++ today", &[]), &g));
        assert!(matches(&record("c++", &[]), &g));
        assert!(!matches(&record("learning c today", &[]), &g));
        assert!(!matches(&record("abc++ today", &[]), &g));
        assert!(!matches(&record("ccc", &[]), &g));
    }

    #[test]
    fn regex_syntax_keyword_does_not_panic() {
        let g = group(&["(.*)", "[a-z", "$^"], &[], true);
        assert!(!matches(&record("plain caption", &[]), &g));
        assert!(matches(&record("weird (.*) token", &[]), &g));
    }

    #[test]
    fn empty_keyword_list_matches_nothing() {
        let g = group(&[], &[], false);
        assert!(!matches(&record("anything at all", &[]), &g));
        let g = group(&["", "   "], &[], true);
        assert!(!matches(&record("anything at all", &[]), &g));
    }

    #[test]
    fn blank_exclude_keyword_is_ignored() {
        let g = group(&["car"], &["  "], false);
        assert!(matches(&record("my car", &[]), &g));
    }

    #[test]
    fn any_inclusion_keyword_suffices() {
        let g = group(&["truck", "car"], &[], true);
        assert!(matches(&record("my car", &[]), &g));
    }

    #[test]
    fn matcher_can_be_used_through_trait_object() {
        let matcher: Box<dyn RecordMatcher> = Box::new(KeywordMatcher::new(&group(&["car"], &[], true)));
        assert!(matcher.matches(&record("my car", &[])));
    }
}

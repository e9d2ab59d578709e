//! Relevance heuristic
//!
//! Estimates how likely a candidate page is to lead towards the target by
//! comparing article names: shared long words score, configured
//! domain-affinity rules add fixed bonuses, and very long names are
//! penalized.

use crate::config::{BoostRule, ScoringConfig};
use crate::url::article_name;

/// Pure scoring function over (candidate, target) URL pairs
#[derive(Debug, Clone)]
pub struct RelevanceScorer {
    exact_match_score: i32,
    separator: char,
    min_token_length: usize,
    token_weight: i32,
    long_name_threshold: usize,
    long_name_penalty: i32,
    boosts: Vec<BoostRule>,
}

impl RelevanceScorer {
    /// Builds a scorer from configuration
    ///
    /// Boost keywords are case-folded once here since names are compared
    /// case-folded.
    pub fn new(config: &ScoringConfig) -> Self {
        let fold = |keywords: &[String]| keywords.iter().map(|k| k.to_lowercase()).collect();

        Self {
            exact_match_score: config.exact_match_score,
            separator: config.separator,
            min_token_length: config.min_token_length,
            token_weight: config.token_weight,
            long_name_threshold: config.long_name_threshold,
            long_name_penalty: config.long_name_penalty,
            boosts: config
                .boosts
                .iter()
                .map(|rule| BoostRule {
                    target_keywords: fold(&rule.target_keywords),
                    candidate_keywords: fold(&rule.candidate_keywords),
                    bonus: rule.bonus,
                })
                .collect(),
        }
    }

    /// Score returned for a case-insensitive name match
    pub fn exact_match_score(&self) -> i32 {
        self.exact_match_score
    }

    /// Scores `candidate_url` for relevance to `target_url`
    ///
    /// Returns 0 when either URL has no article name. The result may be
    /// negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use wikipath::config::ScoringConfig;
    /// use wikipath::search::RelevanceScorer;
    ///
    /// let scorer = RelevanceScorer::new(&ScoringConfig::default());
    /// let target = "https://en.wikipedia.org/wiki/Rutgers_University-Camden";
    ///
    /// assert_eq!(scorer.score(target, target), 1000);
    /// assert!(scorer.score("https://en.wikipedia.org/wiki/Rutgers_University", target) > 0);
    /// assert_eq!(scorer.score("no-article", target), 0);
    /// ```
    pub fn score(&self, candidate_url: &str, target_url: &str) -> i32 {
        let (Some(candidate_name), Some(target_name)) =
            (article_name(candidate_url), article_name(target_url))
        else {
            return 0;
        };

        let candidate = candidate_name.to_lowercase();
        let target = target_name.to_lowercase();

        if candidate == target {
            return self.exact_match_score;
        }

        let mut score = self.shared_token_score(&candidate, &target);

        for rule in &self.boosts {
            let target_hit = rule.target_keywords.iter().any(|k| target.contains(k.as_str()));
            let candidate_hit = rule
                .candidate_keywords
                .iter()
                .any(|k| candidate.contains(k.as_str()));
            if target_hit && candidate_hit {
                score += rule.bonus;
            }
        }

        if candidate_name.chars().count() > self.long_name_threshold {
            score -= self.long_name_penalty;
        }

        score
    }

    /// Sums weighted lengths of candidate words that also occur in the target
    fn shared_token_score(&self, candidate: &str, target: &str) -> i32 {
        candidate
            .split(self.separator)
            .filter_map(|token| {
                let len = token.chars().count();
                (len >= self.min_token_length && target.contains(token)).then_some(len)
            })
            .map(|len| i32::try_from(len).unwrap_or(i32::MAX).saturating_mul(self.token_weight))
            .fold(0i32, |acc, points| acc.saturating_add(points))
    }
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://en.wikipedia.org/wiki/";
    const TARGET: &str = "https://en.wikipedia.org/wiki/Rutgers_University-Camden";

    fn wiki(name: &str) -> String {
        format!("{}{}", BASE, name)
    }

    fn plain_config() -> ScoringConfig {
        ScoringConfig {
            boosts: vec![],
            ..ScoringConfig::default()
        }
    }

    #[test]
    fn test_self_match_returns_exact_score() {
        let scorer = RelevanceScorer::default();
        assert_eq!(scorer.score(TARGET, TARGET), 1000);
        assert_eq!(scorer.score(&wiki("a_b_c"), &wiki("a_b_c")), 1000);
    }

    #[test]
    fn test_self_match_is_case_insensitive() {
        let scorer = RelevanceScorer::default();
        assert_eq!(scorer.score(&wiki("LINUX"), &wiki("linux")), 1000);
    }

    #[test]
    fn test_missing_article_name_scores_zero() {
        let scorer = RelevanceScorer::default();
        assert_eq!(scorer.score("Rutgers_University", TARGET), 0);
        assert_eq!(scorer.score(&wiki("Rutgers_University"), "Rutgers"), 0);
        assert_eq!(scorer.score("https://en.wikipedia.org/wiki/", TARGET), 0);
    }

    #[test]
    fn test_shared_tokens_weighted_by_length() {
        let scorer = RelevanceScorer::new(&plain_config());
        // "rutgers" (7) is shared; "newark" is not in the target
        assert_eq!(scorer.score(&wiki("Rutgers_Newark"), TARGET), 14);
    }

    #[test]
    fn test_short_tokens_ignored() {
        let scorer = RelevanceScorer::new(&plain_config());
        // "new" and "of" are too short even though they appear in the target
        let target = wiki("University_of_New_Haven");
        assert_eq!(scorer.score(&wiki("New_of"), &target), 0);
    }

    #[test]
    fn test_token_is_substring_of_target() {
        let scorer = RelevanceScorer::new(&plain_config());
        // "univ" appears inside "university"
        assert_eq!(scorer.score(&wiki("Univ"), TARGET), 8);
    }

    #[test]
    fn test_institutional_boost() {
        let scorer = RelevanceScorer::default();
        // rutgers 14 + university-newark (no match) + university boost 20
        assert_eq!(scorer.score(&wiki("Rutgers_University-Newark"), TARGET), 34);
    }

    #[test]
    fn test_geographic_boost() {
        let scorer = RelevanceScorer::default();
        // No shared token ("camden," carries a comma); geographic boost 30
        assert_eq!(scorer.score(&wiki("Camden,_New_Jersey"), TARGET), 30);
        assert_eq!(scorer.score(&wiki("Philadelphia"), TARGET), 30);
    }

    #[test]
    fn test_geographic_boost_requires_target_keyword() {
        let scorer = RelevanceScorer::default();
        assert_eq!(scorer.score(&wiki("Philadelphia"), &wiki("Linux")), 0);
    }

    #[test]
    fn test_long_name_penalty() {
        let scorer = RelevanceScorer::new(&plain_config());
        let long_name = "x".repeat(51);
        assert_eq!(scorer.score(&wiki(&long_name), &wiki("Linux")), -5);

        let borderline = "x".repeat(50);
        assert_eq!(scorer.score(&wiki(&borderline), &wiki("Linux")), 0);
    }

    #[test]
    fn test_custom_boost_table() {
        let config = ScoringConfig {
            boosts: vec![BoostRule::new(&["Berlin"], &["brandenburg"], 25)],
            ..ScoringConfig::default()
        };
        let scorer = RelevanceScorer::new(&config);
        let target = wiki("Humboldt_Berlin");
        assert_eq!(scorer.score(&wiki("Brandenburg_Gate"), &target), 25);
    }

    #[test]
    fn test_custom_separator() {
        let config = ScoringConfig {
            separator: '-',
            boosts: vec![],
            ..ScoringConfig::default()
        };
        let scorer = RelevanceScorer::new(&config);
        assert_eq!(scorer.score(&wiki("linux-kernel"), &wiki("kernel-panic")), 12);
    }

    #[test]
    fn test_deterministic() {
        let scorer = RelevanceScorer::default();
        let candidate = wiki("Rutgers_University_New_Jersey_Camden_Campus");
        let first = scorer.score(&candidate, TARGET);
        let second = scorer.score(&candidate, TARGET);
        assert_eq!(first, second);
    }
}

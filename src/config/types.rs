use serde::Deserialize;

/// Main configuration structure for Wikipath
///
/// Every section is optional in the TOML file; missing sections and keys
/// fall back to the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub links: LinkConfig,
    #[serde(default)]
    pub blacklist: BlacklistConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

/// Worker pool configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Number of concurrent search workers
    pub workers: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { workers: 4 }
    }
}

/// HTTP fetching and response cache configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Maximum number of redirects followed for one request
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,

    /// Directory holding cached page bodies
    #[serde(rename = "cache-dir")]
    pub cache_dir: String,

    /// Whether fetched pages are read from and written to the cache
    #[serde(rename = "use-cache")]
    pub use_cache: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (compatible; WikiCrawler/1.0)".to_string(),
            timeout_secs: 10,
            max_redirects: 10,
            cache_dir: ".cache".to_string(),
            use_cache: true,
        }
    }
}

/// Link extraction configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Base URL article links are resolved against
    #[serde(rename = "site-base")]
    pub site_base: String,

    /// Path prefix identifying article links
    #[serde(rename = "article-prefix")]
    pub article_prefix: String,

    /// Namespace markers that disqualify a link (e.g. "File:")
    #[serde(rename = "excluded-namespaces")]
    pub excluded_namespaces: Vec<String>,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            site_base: "https://en.wikipedia.org".to_string(),
            article_prefix: "/wiki/".to_string(),
            excluded_namespaces: [
                "File:",
                "Special:",
                "Wikipedia:",
                "Help:",
                "Category:",
                "Template:",
                "Talk:",
                "Portal:",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// Hub pages excluded from expansion
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BlacklistConfig {
    /// Article names that are never enqueued
    pub pages: Vec<String>,
}

impl Default for BlacklistConfig {
    fn default() -> Self {
        Self {
            pages: [
                "Main_Page",
                "United_States",
                "United_Kingdom",
                "England",
                "France",
                "Germany",
                "China",
                "India",
                "Japan",
                "World_War_II",
                "World_War_I",
                "Latin",
                "Ancient_Greece",
                "Ancient_Rome",
                "English_language",
                "International_Standard_Book_Number",
                "Digital_object_identifier",
                "Geographic_coordinate_system",
                "Library_of_Congress_Control_Number",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// Relevance heuristic configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Score returned when the candidate and target names match
    #[serde(rename = "exact-match-score")]
    pub exact_match_score: i32,

    /// Word separator inside article names
    pub separator: char,

    /// Tokens shorter than this never contribute to the score
    #[serde(rename = "min-token-length")]
    pub min_token_length: usize,

    /// Points per character of a token shared with the target
    #[serde(rename = "token-weight")]
    pub token_weight: i32,

    /// Candidate names longer than this are penalized
    #[serde(rename = "long-name-threshold")]
    pub long_name_threshold: usize,

    /// Penalty subtracted for overly long candidate names
    #[serde(rename = "long-name-penalty")]
    pub long_name_penalty: i32,

    /// Domain-affinity boosts
    #[serde(rename = "boost")]
    pub boosts: Vec<BoostRule>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            exact_match_score: 1000,
            separator: '_',
            min_token_length: 4,
            token_weight: 2,
            long_name_threshold: 50,
            long_name_penalty: 5,
            boosts: vec![
                BoostRule::new(&["university"], &["university"], 20),
                BoostRule::new(&["college"], &["college"], 20),
                BoostRule::new(
                    &["new_jersey", "camden"],
                    &["new_jersey", "jersey", "camden", "philadelphia"],
                    30,
                ),
            ],
        }
    }
}

/// A domain-affinity boost
///
/// The bonus applies when the target name contains any of
/// `target_keywords` and the candidate name contains any of
/// `candidate_keywords`. Keywords are matched against case-folded names.
#[derive(Debug, Clone, Deserialize)]
pub struct BoostRule {
    #[serde(rename = "target-keywords")]
    pub target_keywords: Vec<String>,

    #[serde(rename = "candidate-keywords")]
    pub candidate_keywords: Vec<String>,

    pub bonus: i32,
}

impl BoostRule {
    pub fn new(target_keywords: &[&str], candidate_keywords: &[&str], bonus: i32) -> Self {
        Self {
            target_keywords: target_keywords.iter().map(|s| s.to_string()).collect(),
            candidate_keywords: candidate_keywords.iter().map(|s| s.to_string()).collect(),
            bonus,
        }
    }
}

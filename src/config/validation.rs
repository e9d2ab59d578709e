use crate::config::types::{Config, FetchConfig, LinkConfig, ScoringConfig, SearchSettings};
use crate::ConfigError;
use url::Url;

/// Upper bound on the worker pool size
const MAX_WORKERS: usize = 64;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_search_settings(&config.search)?;
    validate_fetch_config(&config.fetch)?;
    validate_link_config(&config.links)?;
    validate_blacklist(&config.blacklist.pages)?;
    validate_scoring_config(&config.scoring)?;
    Ok(())
}

/// Validates worker pool settings
fn validate_search_settings(settings: &SearchSettings) -> Result<(), ConfigError> {
    if settings.workers < 1 || settings.workers > MAX_WORKERS {
        return Err(ConfigError::Validation(format!(
            "workers must be between 1 and {}, got {}",
            MAX_WORKERS, settings.workers
        )));
    }
    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout-secs must be >= 1".to_string(),
        ));
    }

    if config.use_cache && config.cache_dir.is_empty() {
        return Err(ConfigError::Validation(
            "cache-dir cannot be empty when use-cache is enabled".to_string(),
        ));
    }

    Ok(())
}

/// Validates link extraction configuration
fn validate_link_config(config: &LinkConfig) -> Result<(), ConfigError> {
    let base = Url::parse(&config.site_base)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid site-base: {}", e)))?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "site-base '{}' must use http or https",
            config.site_base
        )));
    }

    if !config.article_prefix.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "article-prefix must start with '/', got '{}'",
            config.article_prefix
        )));
    }

    if config.excluded_namespaces.iter().any(|ns| ns.is_empty()) {
        return Err(ConfigError::Validation(
            "excluded-namespaces cannot contain empty entries".to_string(),
        ));
    }

    Ok(())
}

/// Validates blacklisted article names
fn validate_blacklist(pages: &[String]) -> Result<(), ConfigError> {
    for page in pages {
        if page.is_empty() || page.contains('/') {
            return Err(ConfigError::Validation(format!(
                "blacklist entry must be a bare article name, got '{}'",
                page
            )));
        }
    }
    Ok(())
}

/// Validates the relevance heuristic configuration
fn validate_scoring_config(config: &ScoringConfig) -> Result<(), ConfigError> {
    if config.long_name_threshold == 0 {
        return Err(ConfigError::Validation(
            "long-name-threshold must be >= 1".to_string(),
        ));
    }

    for (index, rule) in config.boosts.iter().enumerate() {
        if rule.target_keywords.is_empty() || rule.candidate_keywords.is_empty() {
            return Err(ConfigError::Validation(format!(
                "boost rule #{} needs at least one target and one candidate keyword",
                index + 1
            )));
        }

        if rule
            .target_keywords
            .iter()
            .chain(&rule.candidate_keywords)
            .any(|k| k.is_empty())
        {
            return Err(ConfigError::Validation(format!(
                "boost rule #{} contains an empty keyword",
                index + 1
            )));
        }
    }

    Ok(())
}

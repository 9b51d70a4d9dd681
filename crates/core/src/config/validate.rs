use super::{types::Config, ConfigError};
use crate::catalog::LoadFailurePolicy;
use crate::franchise::Franchise;

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Fetch timeout is not 0
/// - Asset root is set
/// - Hub overrides name known franchises
/// - Fallback is only chosen by hubs that have fallback rows
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.assets.fetch_timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "assets.fetch_timeout_secs cannot be 0".to_string(),
        ));
    }

    if config.assets.asset_root.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "assets.asset_root cannot be empty".to_string(),
        ));
    }

    let mut slugs: Vec<&String> = config.hubs.keys().collect();
    slugs.sort();
    if let Some(unknown) = slugs
        .into_iter()
        .find(|slug| Franchise::from_slug(slug).is_none())
    {
        return Err(ConfigError::ValidationError(format!(
            "hubs.{unknown} does not name a known franchise"
        )));
    }

    let mut hubs: Vec<_> = config.hubs.iter().collect();
    hubs.sort_by(|a, b| a.0.cmp(b.0));
    for (slug, hub) in hubs {
        let Some(franchise) = Franchise::from_slug(slug) else {
            continue;
        };
        if hub.on_load_failure == Some(LoadFailurePolicy::Fallback)
            && franchise.catalog_config().fallback.is_empty()
        {
            return Err(ConfigError::ValidationError(format!(
                "hubs.{slug}.on_load_failure cannot be fallback: {franchise} has no fallback rows"
            )));
        }
    }

    Ok(())
}

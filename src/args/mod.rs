pub mod types;
pub mod validation;

pub use types::*;

use clap::Parser;
use std::time::Duration;

use crate::error::PoolError;

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}

impl Args {
    /// Settle defaults and freeze the settings into an [`AppConfig`].
    ///
    /// # Errors
    ///
    /// Will return `Err` if no picks file was given and the bundled pool is malformed
    pub fn into_config(self) -> Result<AppConfig, PoolError> {
        let participants = match self.picks {
            Some(PicksFile(picks)) => picks,
            None => validation::bundled_participants()?,
        };
        Ok(AppConfig {
            bind: self.bind,
            port: self.port,
            participants: participants.into(),
            title: self.title,
            leaderboard_url: self.leaderboard_url,
            odds_base_url: self.odds_base_url,
            odds_api_key: self.odds_api_key,
            odds_sport: self.odds_sport,
            odds_regions: self.odds_regions,
            cache_ttl: Duration::from_secs(self.cache_ttl_secs),
            http_timeout: Duration::from_secs(self.http_timeout_secs.max(1)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_bundled_pool() {
        let args = Args::try_parse_from(["fantasy-golf"]).unwrap();
        let config = args.into_config().unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.participants.len(), 20);
        assert_eq!(config.cache_ttl, Duration::from_secs(20));
        assert_eq!(config.leaderboard_url, "https://www.pgatour.com/leaderboard");
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "fantasy-golf",
            "--port",
            "9000",
            "--cache-ttl-secs",
            "60",
            "--odds-sport",
            "golf_the_open_championship_winner",
        ])
        .unwrap();
        let config = args.into_config().unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.odds_sport, "golf_the_open_championship_winner");
    }
}

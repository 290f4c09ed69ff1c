use clap::Parser;
use infra_risk_map::api::{SearchClient, SearchSource};
use infra_risk_map::config::AppConfig;
use infra_risk_map::{SortKey, TierFilter, ViewState};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "infra-risk-map", version, about = "Infrastructure risk map TUI")]
pub struct CliArgs {
    /// Run one search, print the results list and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless results as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the search endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// City to search
    #[arg(long)]
    pub city: Option<String>,

    /// Search radius in kilometres
    #[arg(long, value_name = "KM")]
    pub radius: Option<f64>,

    /// Read the search response from a saved JSON file instead of the endpoint
    #[arg(long, value_name = "PATH")]
    pub fixture: Option<PathBuf>,

    /// Override the log file used by the interactive UI
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,

    /// Initial sort key: name, risk or type
    #[arg(long, value_parser = parse_sort_key, default_value = "name")]
    pub sort: SortKey,

    /// Initial tier filter: all, critical, high, moderate or low
    #[arg(long, value_parser = parse_tier_filter, default_value = "all")]
    pub filter: TierFilter,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(endpoint) = &self.endpoint {
            std::env::set_var("INFRA_SEARCH_URL", endpoint);
        }
        if let Some(city) = &self.city {
            std::env::set_var("INFRA_DEFAULT_CITY", city);
        }
        if let Some(radius) = self.radius {
            std::env::set_var("INFRA_DEFAULT_RADIUS_KM", radius.to_string());
        }
        if let Some(path) = &self.log_file {
            std::env::set_var("INFRA_LOG_FILE", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub const fn view_state(&self) -> ViewState {
        ViewState::new(self.sort, self.filter)
    }

    /// The UI searches straight away when a fixture or city was given.
    pub const fn search_on_start(&self) -> bool {
        self.fixture.is_some() || self.city.is_some()
    }

    pub fn search_source(&self, config: &AppConfig) -> color_eyre::Result<SearchSource> {
        if let Some(path) = &self.fixture {
            return Ok(SearchSource::Fixture(path.clone()));
        }
        let client = SearchClient::new(config.search_url.clone(), config.request_timeout)?;
        Ok(SearchSource::Remote(client))
    }
}

fn parse_sort_key(value: &str) -> Result<SortKey, String> {
    SortKey::parse(value).ok_or_else(|| format!("unknown sort key '{value}' (name, risk, type)"))
}

fn parse_tier_filter(value: &str) -> Result<TierFilter, String> {
    TierFilter::parse(value).ok_or_else(|| {
        format!("unknown filter '{value}' (all, critical, high, moderate, low)")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use infra_risk_map::Tier;

    #[test]
    fn defaults_to_name_and_all() {
        let args = CliArgs::parse_from(["infra-risk-map"]);
        assert_eq!(args.view_state(), ViewState::default());
        assert!(!args.search_on_start());
    }

    #[test]
    fn parses_sort_and_filter() {
        let args = CliArgs::parse_from([
            "infra-risk-map",
            "--sort",
            "risk",
            "--filter",
            "critical",
            "--fixture",
            "results.json",
        ]);
        assert_eq!(args.sort, SortKey::Risk);
        assert_eq!(args.filter, TierFilter::Only(Tier::Critical));
        assert!(args.search_on_start());
    }

    #[test]
    fn rejects_unknown_filter() {
        assert!(CliArgs::try_parse_from(["infra-risk-map", "--filter", "severe"]).is_err());
    }

    #[test]
    fn fixture_source_skips_http_client() -> color_eyre::Result<()> {
        let args = CliArgs::parse_from(["infra-risk-map", "--fixture", "saved.json"]);
        let source = args.search_source(&AppConfig::default())?;
        assert!(matches!(source, SearchSource::Fixture(_)));
        Ok(())
    }
}

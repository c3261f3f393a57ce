use crate::config::ClientConfig;
use crate::domain::model::{Options, PathLayout, QueryId};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "cellbase")]
#[command(about = "Query CellBase feature and genomic region endpoints")]
pub struct CliConfig {
    #[arg(long, help = "TOML file with host, version, species, timeout_seconds, path_layout")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(long = "api-version")]
    pub api_version: Option<String>,

    #[arg(long)]
    pub species: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, value_enum)]
    pub path_layout: Option<PathLayout>,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(help = "Endpoint group: gene, protein, variation or region")]
    pub group: String,

    #[arg(help = "Resource within the group, e.g. transcript or conservation")]
    pub resource: String,

    #[arg(help = "Query id; several ids are comma separated")]
    pub query_id: Option<String>,

    #[arg(long = "option", short = 'o', value_parser = parse_option, help = "Query parameter as key=value")]
    pub options: Vec<(String, String)>,
}

fn parse_option(raw: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;

    if key.is_empty() {
        return Err(format!("empty key in '{}'", raw));
    }
    Ok((key.to_string(), value.to_string()))
}

impl CliConfig {
    /// The config file (or defaults) with command line overrides applied.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(version) = &self.api_version {
            config.version = version.clone();
        }
        if let Some(species) = &self.species {
            config.species = species.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = Some(timeout);
        }
        if let Some(layout) = self.path_layout {
            config.path_layout = layout;
        }

        Ok(config)
    }

    pub fn query_options(&self) -> Options {
        self.options.iter().cloned().collect()
    }

    pub fn query(&self) -> Option<QueryId> {
        self.query_id.as_deref().map(QueryId::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_positional_and_options() {
        let cli = CliConfig::try_parse_from([
            "cellbase",
            "gene",
            "transcript",
            "BRCA2",
            "-o",
            "include=id,name",
            "--option",
            "limit=5",
        ])
        .unwrap();

        assert_eq!(cli.group, "gene");
        assert_eq!(cli.resource, "transcript");
        assert_eq!(cli.query(), Some(QueryId::from("BRCA2")));

        let options = cli.query_options();
        assert_eq!(options.get("include"), Some("id,name"));
        assert_eq!(options.get("limit"), Some("5"));
    }

    #[test]
    fn test_option_without_equals_is_rejected() {
        let result = CliConfig::try_parse_from(["cellbase", "gene", "search", "-o", "limit"]);
        assert!(result.is_err());
        assert!(parse_option("=5").is_err());
        assert_eq!(
            parse_option("region=1:1-100").unwrap(),
            ("region".to_string(), "1:1-100".to_string())
        );
    }

    #[test]
    fn test_overrides_apply_on_top_of_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"host = \"http://localhost:9000\"\nspecies = \"mmusculus\"\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::try_parse_from([
            "cellbase",
            "--config",
            path.as_str(),
            "--api-version",
            "v4",
            "--path-layout",
            "query-first",
            "region",
            "gene",
            "1:1-100",
        ])
        .unwrap();

        let config = cli.client_config().unwrap();
        assert_eq!(config.host, "http://localhost:9000");
        assert_eq!(config.species, "mmusculus");
        assert_eq!(config.version, "v4");
        assert_eq!(config.path_layout, PathLayout::QueryFirst);
    }
}

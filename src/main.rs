use cellbase_client::core::endpoints;
use cellbase_client::utils::logger;
use cellbase_client::utils::validation::Validate;
use cellbase_client::{CellBaseClient, CellBaseError, CliConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting cellbase CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match run(&cli).await {
        Ok(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Query failed: {}", e);
            if let CellBaseError::HttpStatus { body, .. } = &e {
                if !body.is_empty() {
                    tracing::debug!("Response body: {}", body);
                }
            }
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: &CliConfig) -> cellbase_client::Result<serde_json::Value> {
    let config = cli.client_config()?;
    config.validate()?;

    let group = endpoints::group_by_name(&cli.group).ok_or_else(|| CellBaseError::UnknownEndpoint {
        group: cli.group.clone(),
        resource: cli.resource.clone(),
    })?;
    let endpoint = endpoints::lookup(&group, &cli.resource)?;

    tracing::info!("🔎 {} on {}/{}", endpoint, config.version, config.species);

    let cellbase = CellBaseClient::new(config)?;
    cellbase.get(&endpoint, cli.query(), &cli.query_options()).await
}

use clap::Parser;
use org_lens::utils::{logger, validation::Validate};
use org_lens::{CliConfig, HttpFetcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting org-lens");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = config.build_client(HttpFetcher::new());

    match client.public_repos(config.license.as_deref()).await {
        Ok(names) => {
            tracing::info!(
                "Found {} repositories for '{}'",
                names.len(),
                client.org_name()
            );
            if config.json {
                println!("{}", serde_json::to_string_pretty(&names)?);
            } else {
                for name in names {
                    println!("{}", name);
                }
            }
        }
        Err(e) => {
            tracing::error!("Repository listing failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

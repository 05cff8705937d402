use anyhow::Result;
use scholar_console::bin_common::{config_path_from_env, load_client_config, parse_args, Command};
use scholar_console::bin_common::run_command;
use scholar_console::scholar_client::{init_tracing, ScholarApi};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Load config first (before logging is initialized)
    let config_path = config_path_from_env();
    let config = load_client_config(&config_path)?;

    init_tracing(&config.log_level);
    config.log();

    let command = Command::parse(&parse_args())?;
    info!("Running {:?}", command);

    let api = ScholarApi::new(&config)?;

    match run_command(&api, command).await {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(e) => {
            error!("Command failed: {}", e);
            Err(e)
        }
    }
}

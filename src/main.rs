use clap::Parser;
use mikrotik_config_tools::cli::Cli;
use mikrotik_config_tools::logging::logging_setup;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    logging_setup(cli.verbose)?;
    dotenv::dotenv().ok();
    //
    log::debug!("#Start main()");

    mikrotik_config_tools::run(cli).await?;

    Ok(())
}

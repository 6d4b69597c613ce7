use anyhow::Result;
use clap::Parser;
use testpilot::Cli;
use tracing::debug;

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!("Parsed arguments: {:?}", cli);

    let code = cli.execute()?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> anyhow::Result<()> {
    let config = tasksplit::config::load_from_env()?;
    tracing::debug!(?config, "loaded configuration");
    tasksplit::run::run(&config, None).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tasksplit::output::fail(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

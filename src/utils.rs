use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

pub fn setup_logging(verbosity: &str) -> Result<()> {
    let level = match verbosity {
        "silent" => Level::ERROR,
        "normal" => Level::INFO,
        "verbose" => Level::DEBUG,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("rollcall={}", level).parse()?);

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

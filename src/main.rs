use clap::Parser;
use regform::cli::Cli;
use regform::logging::init_tracing;
use regform::shutdown::ShutdownHandle;
use regform::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    if let Some(path) = init_tracing(&config.logging)? {
        tracing::info!(log_file = %path.display(), "logging initialised");
    }

    let shutdown = ShutdownHandle::new();
    shutdown.install_signal_handlers()?;

    if let Err(err) = runtime::run(&config, shutdown) {
        tracing::error!(error = %err, "form exited with error");
        return Err(err.into());
    }
    Ok(())
}

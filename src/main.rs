use anyhow::Result;

use tg_mock::cli::Cli;
use tg_mock::logging;
use tg_mock::{Config, Server};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let mut cfg = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // CLI flags override their config counterparts
    if let Some(port) = cli.port {
        cfg.server.port = port;
    }
    if cli.verbose {
        cfg.server.verbose = true;
    }
    if let Some(dir) = cli.storage_dir {
        cfg.storage.dir = Some(dir);
    }
    if let Some(seed) = cli.faker_seed {
        cfg.server.faker_seed = seed;
    }

    logging::init_logger(cfg.server.verbose)?;

    if !cfg.tokens.is_empty() {
        log::info!("token registry enabled with {} token(s)", cfg.tokens.len());
    }
    if cfg.server.faker_seed != 0 {
        log::info!("deterministic faker seed: {}", cfg.server.faker_seed);
    }

    let server = Server::new(&cfg);
    server.serve().await?;

    Ok(())
}

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tg-mock")]
#[command(author, version, about = "Mock Telegram Bot API server for testing bots without network access", long_about = None)]
pub struct Cli {
    /// HTTP server port (overrides config)
    #[arg(long)]
    pub port: Option<u16>,

    /// Enable verbose request logging (overrides config)
    #[arg(long)]
    pub verbose: bool,

    /// Path to YAML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for file storage (overrides config)
    #[arg(long)]
    pub storage_dir: Option<String>,

    /// Seed for the response faker (0 = random, positive = deterministic)
    #[arg(long)]
    pub faker_seed: Option<u64>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tg-mock"]);
        assert!(cli.port.is_none());
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::parse_from(["tg-mock", "--port", "9001", "--verbose", "--faker-seed", "42"]);
        assert_eq!(cli.port, Some(9001));
        assert!(cli.verbose);
        assert_eq!(cli.faker_seed, Some(42));
    }
}

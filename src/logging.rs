//! Logging initialization.
//!
//! Console-only logger; `verbose` raises the level filter so the bot-plane
//! and control-plane handlers emit per-request debug lines.

use anyhow::Result;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Initialize the terminal logger.
///
/// # Arguments
/// * `verbose` - Log at debug level instead of info
pub fn init_logger(verbose: bool) -> Result<()> {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_can_be_called() {
        // The global logger may already be set by another test; either
        // outcome is acceptable here.
        let result = init_logger(false);
        assert!(result.is_ok() || result.is_err());
    }
}

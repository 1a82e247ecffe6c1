use super::{AppConfig, MAX_DISPLAY_DIMENSION, MAX_RENDERER_ARGS};
use anyhow::{bail, Result};
use clap::Parser;

impl AppConfig {
    /// Parse CLI arguments and validate them right away.
    pub fn parse_args() -> Result<Self> {
        let mut config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Check CLI values and normalize the renderer command.
    pub fn validate(&mut self) -> Result<()> {
        for (flag, value) in [
            ("--display-width", self.display_width),
            ("--display-height", self.display_height),
        ] {
            if !(1..=MAX_DISPLAY_DIMENSION).contains(&value) {
                bail!("{flag} must be between 1 and {MAX_DISPLAY_DIMENSION}, got {value}");
            }
        }

        if let Some(cmd) = &mut self.renderer_cmd {
            let trimmed = cmd.trim();
            if trimmed.is_empty() {
                bail!("--renderer-cmd must not be empty");
            }
            if trimmed.chars().any(char::is_control) {
                bail!("--renderer-cmd must not contain control characters");
            }
            *cmd = trimmed.to_string();
        }

        if self.renderer_args.len() > MAX_RENDERER_ARGS {
            bail!(
                "--renderer-arg repeated too many times (max {MAX_RENDERER_ARGS}, got {})",
                self.renderer_args.len()
            );
        }
        if self.renderer_cmd.is_none() && !self.renderer_args.is_empty() {
            bail!("--renderer-arg requires --renderer-cmd");
        }

        Ok(())
    }

    pub fn logging_enabled(&self) -> bool {
        !self.no_logs
    }
}

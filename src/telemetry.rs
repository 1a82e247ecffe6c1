use crate::config::AppConfig;
use std::fs::OpenOptions;
use std::io;
use std::sync::OnceLock;
use tracing::Level;
use tracing_subscriber::fmt::time::UtcTime;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Install the global subscriber. Stdout carries the host protocol, so logs
/// go to stderr unless a log file is configured.
pub fn init_tracing(config: &AppConfig) {
    if !config.logging_enabled() {
        return;
    }
    let level = if config.logs { Level::DEBUG } else { Level::INFO };

    let _ = TRACING_INIT.get_or_init(|| {
        let builder = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_timer(UtcTime::rfc_3339())
            .with_target(false);

        let installed = match (&config.log_file, config.log_json) {
            (Some(path), json) => {
                let file = match OpenOptions::new().create(true).append(true).open(path) {
                    Ok(file) => file,
                    Err(err) => {
                        eprintln!("Could not open log file {}: {err}", path.display());
                        return;
                    }
                };
                if json {
                    tracing::subscriber::set_global_default(
                        builder.json().with_writer(file).finish(),
                    )
                } else {
                    tracing::subscriber::set_global_default(
                        builder.with_ansi(false).with_writer(file).finish(),
                    )
                }
            }
            (None, true) => tracing::subscriber::set_global_default(
                builder.json().with_writer(io::stderr).finish(),
            ),
            (None, false) => {
                tracing::subscriber::set_global_default(builder.with_writer(io::stderr).finish())
            }
        };
        if installed.is_err() {
            eprintln!("A global tracing subscriber is already installed");
        }
    });
}

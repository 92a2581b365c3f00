//! Logging Infrastructure
//!
//! `RUST_LOG` wins over the configured level. With a log directory the
//! output goes to a daily rolling file instead of stdout.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG` nor a level is given
fn default_directive(level: &str) -> String {
    format!("admin_server={level},shared={level},tower_http=info,sqlx=warn")
}

/// Initialize the logger with stdout output
pub fn init_logger(log_level: &str) {
    init_logger_with_file(log_level, false, None);
}

/// Initialize the logger with optional JSON format and file output
pub fn init_logger_with_file(log_level: &str, json: bool, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(log_level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        match std::fs::create_dir_all(log_path) {
            Ok(()) => {
                let file_appender = tracing_appender::rolling::daily(log_path, "admin-server");
                let builder = builder.with_ansi(false).with_writer(file_appender);
                let result = if json {
                    builder.json().try_init()
                } else {
                    builder.try_init()
                };
                if let Err(e) = result {
                    eprintln!("Logger already initialized: {e}");
                }
                return;
            }
            Err(e) => eprintln!("Cannot create log directory {dir}: {e}; logging to stdout"),
        }
    }

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        eprintln!("Logger already initialized: {e}");
    }
}

use std::collections::HashMap;
use std::time::Duration;
use fern::colors::{Color, ColoredLevelConfig};
use log::{info, LevelFilter, SetLoggerError};
use tokio_shutdown::Shutdown;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

/// Parses a raw query string into a map of lowercased keys to raw byte values.
///
/// Values are percent-decoded into bytes and never interpreted as UTF-8, so
/// binary `info_hash` and `peer_id` values survive intact. Repeated keys keep
/// every value in order of appearance; a key without `=` records an empty value.
/// Only `%XX` escapes are decoded: `+` stays a literal plus, not a space.
pub fn parse_query(query: Option<String>) -> Result<HashMap<String, Vec<Vec<u8>>>, CustomError> {
    let mut queries: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
    let Some(raw_query) = query else {
        return Ok(queries);
    };

    for query_item in raw_query.split('&') {
        if query_item.is_empty() {
            continue;
        }
        let (key_name_raw, value_data_raw) = query_item.split_once('=').unwrap_or((query_item, ""));
        let key_name = percent_encoding::percent_decode_str(key_name_raw).decode_utf8_lossy().to_lowercase();
        if key_name.is_empty() {
            return Err(CustomError::new("malformed query string"));
        }
        let value_data = percent_encoding::percent_decode_str(value_data_raw).collect::<Vec<u8>>();
        queries.entry(key_name).or_default().push(value_data);
    }

    Ok(queries)
}

pub fn log_level_filter(level: &str) -> Option<LevelFilter> {
    match level {
        "off" => Some(LevelFilter::Off),
        "trace" => Some(LevelFilter::Trace),
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), SetLoggerError>
{
    let level = log_level_filter(config.log_level.as_str()).unwrap_or(LevelFilter::Info);

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()?;

    info!("logging initialized.");
    Ok(())
}

/// Sleeps for `timeout`, returning `true` early if shutdown was requested.
pub async fn shutdown_waiting(timeout: Duration, shutdown_handler: Shutdown) -> bool
{
    tokio::select! {
        _ = tokio::time::sleep(timeout) => false,
        _ = shutdown_handler.handle() => true,
    }
}

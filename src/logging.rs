use log::LevelFilter;

pub const LOG_ENV_VAR: &str = "TS_CLI_LOG";

/// Parses a level name, falling back to `Warn`
#[must_use]
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Installs a stderr logger whose level is taken from `TS_CLI_LOG`.
///
/// # Errors
/// Returns an error if a logger has already been installed
pub fn init_logging() -> Result<(), log::SetLoggerError> {
    let level = level_from(std::env::var(LOG_ENV_VAR).ok().as_deref());

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from() {
        assert_eq!(level_from(None), LevelFilter::Warn);
        assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from(Some("INFO")), LevelFilter::Info);
        assert_eq!(level_from(Some(" trace ")), LevelFilter::Trace);
        assert_eq!(level_from(Some("loud")), LevelFilter::Warn);
    }
}

//! `env_logger` set-up shared by the windowed and headless runs.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Default level for the given verbosity; `RUST_LOG` still takes precedence.
#[must_use]
pub const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes the global logger.
///
/// When `verbose` is `true`, debug messages (entity creation, config loading)
/// are printed. Otherwise only info level and above are shown.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_level(verbose).to_string());
    let mut builder = Builder::from_env(env);
    builder.format_timestamp_millis();

    // `try_init` only fails if a logger was already set. Ignore that case so
    // tests can call `init` multiple times without panicking.
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_selects_level() {
        assert_eq!(default_level(true), LevelFilter::Debug);
        assert_eq!(default_level(false), LevelFilter::Info);
    }

    #[test]
    fn init_twice_is_harmless() {
        init(false);
        init(true);
        log::info!("logger initialised twice");
    }
}

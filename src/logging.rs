//! Logger setup for the binary
//!
//! `RUST_LOG` wins when set. Otherwise the level comes from the `-v` count:
//! none is `warn`, one is `info`, two or more is `debug`.

use log::LevelFilter;

/// Level for a given `-v` count
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Install the global logger; later calls are ignored
pub fn init(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_for(verbosity));
    builder.parse_default_env();
    builder.format_timestamp(None);

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(7), LevelFilter::Debug);
    }

    #[test]
    fn init_twice_is_harmless() {
        init(0);
        init(2);
    }
}

use std::time::Duration;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber, `RUST_LOG` overrides the info default
pub fn init_tracing() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .with_target(false)
        .init();
}

pub fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

/// Time spent per unit of work, `None` when there was no work
pub fn per_unit(time: Duration, units: usize) -> Option<Duration> {
    match units {
        0 => None,
        n => Some(time.div_f64(n as f64)),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tracing::level_filters::LevelFilter;

    use super::{log_filter, per_unit};

    #[test]
    fn filter_defaults_to_info() {
        assert_eq!(log_filter("").max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn filter_keeps_directives() {
        assert_eq!(log_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter("error").max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn per_unit_no_work() {
        // an empty input file records 0 bits
        assert_eq!(per_unit(Duration::from_millis(3), 0), None);
        assert_eq!(per_unit(Duration::ZERO, 0), None);
    }

    #[test]
    fn per_unit_splits_time() {
        assert_eq!(per_unit(Duration::from_secs(8), 8), Some(Duration::from_secs(1)));
        assert_eq!(per_unit(Duration::ZERO, 1024), Some(Duration::ZERO));
    }
}

//! Writes statistics to stdout as lines of the form `{prefix} {name}={value}`.
//!
//! Nothing is written until [`configure_statistic_logging`] has been called; the binary only does
//! so when the user asks for statistics.

use std::fmt::Display;
use std::io::stdout;
use std::io::Write;
use std::sync::OnceLock;

use convert_case::Case;
use convert_case::Casing;

/// How a single statistic is rendered.
#[derive(Debug, Clone, Copy)]
struct StatisticFormat {
    /// Printed before every statistic, e.g. `c stat`.
    prefix: &'static str,
    /// The casing which is applied to the name of every statistic.
    casing: Case,
}

impl StatisticFormat {
    fn render(&self, name: impl Display, value: impl Display) -> String {
        format!(
            "{} {}={value}",
            self.prefix,
            name.to_string().to_case(self.casing)
        )
    }
}

static STATISTIC_FORMAT: OnceLock<StatisticFormat> = OnceLock::new();

/// Enables the logging of statistics with the given `prefix`; the name of every statistic is
/// converted to `casing`.
///
/// Only the first call has an effect.
pub fn configure_statistic_logging(prefix: &'static str, casing: Case) {
    let _ = STATISTIC_FORMAT.set(StatisticFormat { prefix, casing });
}

/// Logs the statistic `name` with `value`, if statistic logging has been configured.
pub fn log_statistic(name: impl Display, value: impl Display) {
    if let Some(format) = STATISTIC_FORMAT.get() {
        let _ = writeln!(stdout().lock(), "{}", format.render(name, value));
    }
}

/// Returns whether [`configure_statistic_logging`] has been called.
pub fn should_log_statistics() -> bool {
    STATISTIC_FORMAT.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORMAT: StatisticFormat = StatisticFormat {
        prefix: "c stat",
        casing: Case::Camel,
    };

    #[test]
    fn component_prefixes_are_joined_into_the_casing() {
        assert_eq!(
            "c stat propagationNumRevisions=12",
            FORMAT.render("propagation_num_revisions", 12)
        );
    }

    #[test]
    fn names_already_in_the_casing_are_kept() {
        assert_eq!("c stat numColours=3", FORMAT.render("numColours", 3));
    }

    #[test]
    fn casing_is_configurable() {
        let format = StatisticFormat {
            prefix: "%%%stat",
            casing: Case::Snake,
        };

        assert_eq!(
            "%%%stat engine_num_backtracks=0",
            format.render("engineNumBacktracks", 0)
        );
    }
}

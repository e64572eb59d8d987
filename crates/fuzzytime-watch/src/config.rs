use anyhow::{Context, bail};
use clap::Parser;
use fuzzytime::{Settings, parse_timestamp};

/// Runtime configuration for the `fuzzytime-watch` binary.
///
/// Every rendering option maps onto a [`Settings`] field and can be given
/// as a CLI argument or through the environment.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "fuzzytime-watch",
    version,
    about = "Print timestamps as self-refreshing fuzzy phrases"
)]
pub struct CliArgs {
    /// Timestamps to watch, e.g. "2024-05-01T09:30:00Z" or
    /// "2024-05-01 11:30:00+02:00". Inputs without an offset are read as UTC.
    #[arg(required = true)]
    pub timestamps: Vec<String>,

    /// Milliseconds between refreshes.
    ///
    /// Environment variable: `REFRESH_MILLIS`
    #[arg(long, env = "REFRESH_MILLIS", default_value_t = fuzzytime::DEFAULT_REFRESH_MILLIS)]
    pub refresh_millis: u64,

    /// Render future timestamps as "... from now" instead of "... ago".
    ///
    /// Environment variable: `ALLOW_FUTURE`
    #[arg(long, env = "ALLOW_FUTURE", default_value_t = false)]
    pub allow_future: bool,

    /// Show a `-H:MM:SS` countdown while a timestamp is less than this many
    /// seconds away.
    ///
    /// Environment variable: `COUNTDOWN_CUTOFF`
    #[arg(long, env = "COUNTDOWN_CUTOFF")]
    pub countdown_cutoff: Option<f64>,

    /// Show a `+H:MM:SS` countup while a timestamp passed less than this
    /// many seconds ago.
    ///
    /// Environment variable: `COUNTUP_CUTOFF`
    #[arg(long, env = "COUNTUP_CUTOFF")]
    pub countup_cutoff: Option<f64>,

    /// Log every threshold a refresh crosses.
    ///
    /// Environment variable: `FIRE_THRESHOLDS`
    #[arg(long, env = "FIRE_THRESHOLDS", default_value_t = false)]
    pub fire_thresholds: bool,

    /// Comma separated thresholds, in seconds.
    ///
    /// Environment variable: `THRESHOLDS`
    #[arg(long, env = "THRESHOLDS", value_delimiter = ',', default_value = "0")]
    pub thresholds: Vec<f64>,

    /// Render every timestamp once and exit.
    #[arg(long, default_value_t = false)]
    pub once: bool,
}

#[derive(Debug, Clone)]
pub struct WatchConfig {
    pub timestamps: Vec<String>,
    pub settings: Settings,
}

impl TryFrom<CliArgs> for WatchConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.timestamps.is_empty() {
            bail!("at least one timestamp is required");
        }
        for raw in &args.timestamps {
            parse_timestamp(raw).with_context(|| format!("cannot watch {raw:?}"))?;
        }

        for (name, cutoff) in [
            ("COUNTDOWN_CUTOFF", args.countdown_cutoff),
            ("COUNTUP_CUTOFF", args.countup_cutoff),
        ] {
            if let Some(cutoff) = cutoff {
                if !cutoff.is_finite() || cutoff <= 0.0 {
                    bail!("{name} must be a positive number of seconds, got {cutoff}");
                }
            }
        }

        if let Some(bad) = args.thresholds.iter().find(|t| !t.is_finite()) {
            bail!("THRESHOLDS must be finite, got {bad}");
        }

        let settings = Settings {
            refresh_millis: if args.once { 0 } else { args.refresh_millis },
            allow_future: args.allow_future,
            countdown_cutoff: args.countdown_cutoff,
            countup_cutoff: args.countup_cutoff,
            fire_thresholds: args.fire_thresholds,
            thresholds: args.thresholds,
            ..Settings::default()
        };

        Ok(Self {
            timestamps: args.timestamps,
            settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<WatchConfig> {
        let args = CliArgs::try_parse_from(["fuzzytime-watch"].iter().chain(args))?;
        WatchConfig::try_from(args)
    }

    #[test]
    fn maps_flags_onto_settings() {
        let config = parse(&[
            "--allow-future",
            "--countdown-cutoff",
            "3600",
            "--fire-thresholds",
            "--thresholds",
            "0,60,3600",
            "2024-05-01T09:30:00Z",
            "2024-05-01 11:30:00+02:00",
        ])
        .unwrap();

        assert_eq!(config.timestamps.len(), 2);
        let settings = &config.settings;
        assert!(settings.allow_future);
        assert!(settings.fire_thresholds);
        assert_eq!(settings.countdown_cutoff, Some(3600.0));
        assert_eq!(settings.countup_cutoff, None);
        assert_eq!(settings.thresholds, [0.0, 60.0, 3600.0]);
    }

    #[test]
    fn once_disables_refresh() {
        let config = parse(&["--once", "--refresh-millis", "500", "2024-05-01T09:30:00Z"]).unwrap();
        assert_eq!(config.settings.refresh_millis, 0);

        let config = parse(&["--refresh-millis", "500", "2024-05-01T09:30:00Z"]).unwrap();
        assert_eq!(config.settings.refresh_millis, 500);
    }

    #[test]
    fn rejects_unparseable_timestamps() {
        let err = parse(&["2024-05-01T09:30:00Z", "tomorrow"]).unwrap_err();
        assert!(err.to_string().contains("tomorrow"), "{err}");
    }

    #[test]
    fn rejects_non_positive_cutoffs() {
        assert!(parse(&["--countup-cutoff", "0", "2024-05-01T09:30:00Z"]).is_err());
        assert!(parse(&["--countdown-cutoff=-5", "2024-05-01T09:30:00Z"]).is_err());
    }

    #[test]
    fn requires_a_timestamp() {
        assert!(CliArgs::try_parse_from(["fuzzytime-watch"]).is_err());
    }
}

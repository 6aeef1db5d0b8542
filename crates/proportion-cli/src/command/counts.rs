//! `successes/trials` sample arguments.

use std::{num::ParseFloatError, str::FromStr};

use proportion_stats::sample::SampleProportion;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SampleCounts {
    pub successes: f64,
    pub trials: f64,
}

impl SampleCounts {
    pub(crate) fn to_sample(self) -> SampleProportion {
        SampleProportion::new(self.trials, self.successes, None)
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub(crate) enum ParseSampleCountsError {
    #[display("expected `successes/trials`, got '{input}'")]
    MissingSeparator { input: String },
    #[display("invalid count '{value}'")]
    InvalidCount {
        value: String,
        source: ParseFloatError,
    },
}

impl FromStr for SampleCounts {
    type Err = ParseSampleCountsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (successes, trials) =
            s.split_once('/')
                .ok_or_else(|| ParseSampleCountsError::MissingSeparator {
                    input: s.to_owned(),
                })?;
        Ok(Self {
            successes: parse_count(successes)?,
            trials: parse_count(trials)?,
        })
    }
}

fn parse_count(value: &str) -> Result<f64, ParseSampleCountsError> {
    let value = value.trim();
    value
        .parse()
        .map_err(|source| ParseSampleCountsError::InvalidCount {
            value: value.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let counts: SampleCounts = "50/100".parse().unwrap();
        assert_eq!(
            counts,
            SampleCounts {
                successes: 50.0,
                trials: 100.0
            }
        );

        let counts: SampleCounts = " 12.5 / 40 ".parse().unwrap();
        assert_eq!(counts.successes, 12.5);
        assert_eq!(counts.trials, 40.0);
    }

    #[test]
    fn test_parse_errors() {
        let err = "50".parse::<SampleCounts>().unwrap_err();
        assert!(matches!(err, ParseSampleCountsError::MissingSeparator { .. }));
        assert_eq!(err.to_string(), "expected `successes/trials`, got '50'");

        let err = "fifty/100".parse::<SampleCounts>().unwrap_err();
        assert!(matches!(
            err,
            ParseSampleCountsError::InvalidCount { ref value, .. } if value == "fifty"
        ));
        assert!(std::error::Error::source(&err).is_some());

        assert!("50/".parse::<SampleCounts>().is_err());
        assert!("50/100/3".parse::<SampleCounts>().is_err());
    }

    #[test]
    fn test_to_sample() {
        let sample = SampleCounts {
            successes: 40.0,
            trials: 100.0,
        }
        .to_sample();
        assert_eq!(sample.mean(), 0.4);
        assert_eq!(sample.compare(), None);
    }
}

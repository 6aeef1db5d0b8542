use std::{io::Write as _, path::PathBuf};

use clap::Args;
use proportion_stats::difference::DifferenceOfProportions;
use serde::Serialize;

use crate::{
    command::{counts::SampleCounts, table},
    util,
};

#[derive(Debug, Clone, Args)]
pub(crate) struct DiffArg {
    /// First sample as `successes/trials`
    pub first: SampleCounts,

    /// Second sample as `successes/trials`
    pub second: SampleCounts,

    /// Write JSON instead of a text table
    #[arg(long)]
    pub json: bool,

    /// Output file path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct DiffReport<'a> {
    #[serde(flatten)]
    result: &'a DifferenceOfProportions,
    z: f64,
}

pub(crate) fn run(arg: DiffArg) -> anyhow::Result<()> {
    let s1 = arg.first.to_sample();
    let s2 = arg.second.to_sample();
    util::warn_on_degenerate_sample("first", &s1);
    util::warn_on_degenerate_sample("second", &s2);

    let result = DifferenceOfProportions::between(s1, s2);

    let mut output = util::Output::from_output_path(arg.output)?;
    if arg.json {
        output.write_json(&DiffReport {
            result: &result,
            z: result.z(),
        })
    } else {
        output.write_report(|w| {
            table::write_summary(w, "First", result.s1())?;
            writeln!(w)?;
            table::write_summary(w, "Second", result.s2())?;
            writeln!(w)?;
            table::write_difference(w, &result)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn diff_arg(json: bool, output: PathBuf) -> DiffArg {
        DiffArg {
            first: "50/100".parse().unwrap(),
            second: "40/100".parse().unwrap(),
            json,
            output: Some(output),
        }
    }

    #[test]
    fn test_run_writes_json_report() {
        let path = util::temp_output_path("run-diff.json");
        run(diff_arg(true, path.clone())).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        let probability = json["probability"].as_f64().unwrap();
        assert!((probability - 0.923_436_274_490_165).abs() < 1e-9);
        let z = json["z"].as_f64().unwrap();
        assert!((z - 1.428_571_428_571_428).abs() < 1e-9);
        assert_eq!(json["s2"]["mean"], 0.4);
    }

    #[test]
    fn test_run_writes_text_report() {
        let path = util::temp_output_path("run-diff.txt");
        run(diff_arg(false, path.clone())).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(text.starts_with("First\n"));
        assert!(text.contains("\nSecond\n"));
        assert!(text.contains("\nDifference\n"));
        assert!(text.contains("0.923436"));
    }
}

use std::{io::Write as _, path::PathBuf};

use clap::Args;
use proportion_stats::sample::{DEFAULT_Z_OFFSETS, SampleProportion};

use crate::{command::table, util};

#[derive(Debug, Clone, Args)]
pub(crate) struct SampleArg {
    /// Number of trials
    #[arg(long)]
    pub trials: f64,

    /// Number of successes
    #[arg(long)]
    pub successes: f64,

    /// Observed count to evaluate against the sample's distribution
    #[arg(long, allow_negative_numbers = true)]
    pub compare: Option<f64>,

    /// Z-offsets to tabulate (comma-separated)
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = DEFAULT_Z_OFFSETS
    )]
    pub offsets: Vec<f64>,

    /// Write JSON instead of a text table
    #[arg(long)]
    pub json: bool,

    /// Output file path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: SampleArg) -> anyhow::Result<()> {
    let mut sample = SampleProportion::new(arg.trials, arg.successes, arg.compare);
    util::warn_on_degenerate_sample("sample", &sample);
    sample.compute_z_scores_with(&arg.offsets);

    let mut output = util::Output::from_output_path(arg.output)?;
    if arg.json {
        output.write_json(&sample)
    } else {
        output.write_report(|w| {
            table::write_summary(w, "Sample", &sample)?;
            writeln!(w)?;
            table::write_z_scores(w, &sample)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_run_writes_json_report() {
        let path = util::temp_output_path("run-sample.json");
        run(SampleArg {
            trials: 100.0,
            successes: 50.0,
            compare: Some(60.0),
            offsets: vec![0.0, 1.0],
            json: true,
            output: Some(path.clone()),
        })
        .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["base_z_scores"].as_array().unwrap().len(), 2);
        assert_eq!(json["base_z_scores"][0]["probability"], 0.5);
        let z = json["compare_z_score"]["z"].as_f64().unwrap();
        assert!((z - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_run_writes_text_report() {
        let path = util::temp_output_path("run-sample.txt");
        run(SampleArg {
            trials: 100.0,
            successes: 50.0,
            compare: Some(-5.0),
            offsets: DEFAULT_Z_OFFSETS.to_vec(),
            json: false,
            output: Some(path.clone()),
        })
        .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(text.starts_with("Sample\n"));
        assert!(text.contains("0.550000"));
        assert!(!text.contains("* compare"));
    }
}

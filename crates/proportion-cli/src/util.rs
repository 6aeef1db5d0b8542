use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::PathBuf,
};

use anyhow::Context;
use proportion_stats::sample::SampleProportion;

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.finish()
    }

    /// Writes a text report produced by `render`.
    pub fn write_report<F>(&mut self, render: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut Self) -> io::Result<()>,
    {
        render(&mut *self)
            .with_context(|| format!("Failed to write report to {}", self.display_path()))?;
        self.finish()
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        if let Output::File { path, .. } = self {
            eprintln!("Saved to {}", path.display());
        }
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

/// Describes why a sample's counts are outside the range where the
/// statistics are meaningful. The statistics are still computed as given.
pub fn degenerate_sample_warnings(label: &str, sample: &SampleProportion) -> Vec<String> {
    let trials = sample.trials();
    let successes = sample.successes();
    let mut warnings = vec![];
    if trials <= 0.0 || trials.is_nan() {
        warnings.push(format!("{label}: trials must be positive (got {trials})"));
    } else if !(0.0..=trials).contains(&successes) {
        warnings.push(format!(
            "{label}: successes {successes} is outside [0, {trials}]"
        ));
    }
    if let Some(compare) = sample.compare().filter(|&c| c < 0.0) {
        warnings.push(format!(
            "{label}: comparison count {compare} is negative and is ignored"
        ));
    }
    warnings
}

pub fn warn_on_degenerate_sample(label: &str, sample: &SampleProportion) {
    for warning in degenerate_sample_warnings(label, sample) {
        eprintln!("Warning: {warning}");
    }
}

#[cfg(test)]
pub(crate) fn temp_output_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("proportions-{}-{name}", std::process::id()))
}

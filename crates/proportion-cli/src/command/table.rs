//! Text tables for sample and difference reports.

use std::io::{self, Write};

use proportion_stats::{difference::DifferenceOfProportions, sample::SampleProportion};

const RULE_WIDTH: usize = 40;

fn write_rule<W>(w: &mut W) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(w, "  {}", "-".repeat(RULE_WIDTH))
}

fn write_row<W>(w: &mut W, label: &str, value: f64) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(w, "  {label:<22} {value:>17.6}")
}

pub(super) fn write_summary<W>(w: &mut W, title: &str, sample: &SampleProportion) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(w, "{title}")?;
    write_rule(w)?;
    write_row(w, "Trials", sample.trials())?;
    write_row(w, "Successes", sample.successes())?;
    if let Some(compare) = sample.compare() {
        write_row(w, "Compare", compare)?;
    }
    write_row(w, "Mean", sample.mean())?;
    write_row(w, "Variance", sample.variance())?;
    write_row(w, "Standard deviation", sample.standard_deviation())?;
    Ok(())
}

/// Writes the sample's stored z-scores, followed by the comparison row if present.
pub(super) fn write_z_scores<W>(w: &mut W, sample: &SampleProportion) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(w, "  {:<10} {:>12} {:>16}", "Z", "Value", "P(X <= value)")?;
    write_rule(w)?;
    for score in sample.base_z_scores() {
        writeln!(
            w,
            "  {:<10.3} {:>12.6} {:>16.6}",
            score.z, score.value, score.probability
        )?;
    }
    if let Some(score) = sample.compare_z_score() {
        write_rule(w)?;
        writeln!(
            w,
            "  {:<10} {:>12.6} {:>16.6}",
            format!("{:.3}*", score.z),
            score.value,
            score.probability
        )?;
        writeln!(w, "  * compare")?;
    }
    Ok(())
}

pub(super) fn write_difference<W>(w: &mut W, result: &DifferenceOfProportions) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(w, "Difference")?;
    write_rule(w)?;
    write_row(w, "Difference", result.difference())?;
    write_row(w, "Variance", result.variance())?;
    write_row(w, "Standard deviation", result.standard_deviation())?;
    write_row(w, "Z", result.z())?;
    write_row(w, "P(X <= difference)", result.probability())?;
    Ok(())
}

use crate::errors::{AppErrors, AppResult};
use crate::models::params::ComparisonParams;
use crate::models::projection::{ComparisonReport, OutputRow};
use crate::services::compound::ContinuousCompound;
use crate::services::linear_search::LinearSearch;
use crate::services::rate_model::RateModel;
use csv::WriterBuilder;
use std::io;
use std::io::Write;

/// Runs both accrual models and compares their per-second rates.
///
/// # Arguments
/// * `params` - The numeric inputs of the comparison run.
///
/// # Returns
/// * `AppResult<ComparisonReport>` - Returns both outcomes and the
///   compound/linear rate ratio, or an `AppErrors` variant if either model
///   fails.
pub fn run_comparison(params: &ComparisonParams) -> AppResult<ComparisonReport> {
    let linear = LinearSearch.solve(params)?;
    let compound = ContinuousCompound.solve(params)?;
    let ratio = compound.per_sec / linear.per_sec;
    Ok(ComparisonReport {
        linear,
        compound,
        ratio,
    })
}

/// Writes the report as the five plain-text lines, in their fixed order.
pub fn write_plain_report<W: Write>(mut w: W, report: &ComparisonReport) -> AppResult<()> {
    render_plain(&mut w, report).map_err(|e| AppErrors::Io(format!("write report: {e}")))
}

fn render_plain<W: Write>(w: &mut W, report: &ComparisonReport) -> io::Result<()> {
    writeln!(w, "FOUND LINEAR {}", report.linear.per_sec)?;
    writeln!(w, "RESULT FROM LINEAR {}", report.linear.annual_total)?;
    writeln!(w, "FROM_COMPOUND {}", report.compound.per_sec)?;
    writeln!(
        w,
        "RESULT_FROM_COMPOUND_CLAIMED_EACH_WEEK {}",
        report.compound.annual_total
    )?;
    writeln!(w, "ratio of compound / linear {}", report.ratio)?;
    Ok(())
}

/// Writes the report as CSV rows, one per model, headers on.
pub fn write_csv_report<W: Write>(w: W, report: &ComparisonReport) -> AppResult<()> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(w);

    let rows = [
        OutputRow::from((LinearSearch.label(), &report.linear, 1.0)),
        OutputRow::from((ContinuousCompound.label(), &report.compound, report.ratio)),
    ];
    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppErrors::Io(format!("write csv: {e}")))?;
    }
    wtr.flush()
        .map_err(|e| AppErrors::Io(format!("flush csv: {e}")))?;
    Ok(())
}

use super::AnalysisOutput;
use crate::formatting::Formatter;
use std::fmt::{self, Write};

/// Plain-text summary of an analysis run.
pub fn render_terminal(output: &AnalysisOutput, fmt: &Formatter) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let report = &output.report;

    writeln!(out, "{}", fmt.header("COVERAGE GAP SUMMARY"))?;
    writeln!(out, "Design:   {}", fmt.bold(&report.design))?;
    writeln!(out, "Overall:  {}", fmt.coverage(report.overall_coverage))?;
    for cg in &report.covergroups {
        writeln!(out, "  {:<32} {}", cg.name, fmt.coverage(cg.coverage))?;
    }
    for cross in &report.cross_coverage {
        writeln!(
            out,
            "  {:<32} {} (cross)",
            cross.name,
            fmt.coverage(cross.coverage)
        )?;
    }

    write_holes(&mut out, output, fmt)?;
    write_suggestions(&mut out, output, fmt)?;
    write_closure(&mut out, output, fmt)?;

    Ok(out)
}

fn write_holes(out: &mut String, output: &AnalysisOutput, fmt: &Formatter) -> fmt::Result {
    let report = &output.report;
    writeln!(out)?;
    writeln!(
        out,
        "{} ({} bins, {} cross tuples)",
        fmt.header("UNCOVERED"),
        report.uncovered_bins.len(),
        report.cross_holes()
    )?;
    for hole in &report.uncovered_bins {
        writeln!(out, "  - {}", hole.target_id())?;
    }
    for cross in &report.cross_coverage {
        for tuple in &cross.uncovered {
            writeln!(out, "  - {} {}", cross.name, fmt.dim(tuple))?;
        }
    }
    Ok(())
}

fn write_suggestions(out: &mut String, output: &AnalysisOutput, fmt: &Formatter) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}", fmt.header("SUGGESTIONS"))?;
    if output.suggestions.is_empty() {
        writeln!(out, "  (none)")?;
    }

    for (rank, s) in output.suggestions.iter().enumerate() {
        let score = s.score.map(|v| format!("{:.2}", v)).unwrap_or_default();
        writeln!(
            out,
            "#{} {} [{}] {} ({})",
            rank + 1,
            fmt.tier(s.priority),
            score,
            fmt.bold(&s.target_bin),
            s.difficulty
        )?;
        if !s.suggestion.is_empty() {
            writeln!(out, "   {}", s.suggestion)?;
        }
        for step in &s.test_outline {
            writeln!(out, "     {}", fmt.dim(step))?;
        }
        if !s.dependencies.is_empty() {
            writeln!(out, "   depends on: {}", s.dependencies.join(", "))?;
        }
    }

    for skip in &output.skipped {
        writeln!(
            out,
            "{} {} after {} attempt(s): {}",
            fmt.warning("skipped"),
            skip.target_bin,
            skip.attempts,
            skip.reason
        )?;
    }
    if output.cancelled {
        writeln!(out, "{}", fmt.warning("run cancelled; results are partial"))?;
    }
    Ok(())
}

fn write_closure(out: &mut String, output: &AnalysisOutput, fmt: &Formatter) -> fmt::Result {
    let c = &output.closure;
    writeln!(out)?;
    writeln!(out, "{}", fmt.header("CLOSURE ESTIMATE"))?;
    writeln!(
        out,
        "  {} hours / {:.1} days, {}% probability (complexity {})",
        c.hours,
        c.days,
        c.probability_pct,
        c.total_complexity()
    )?;
    Ok(())
}

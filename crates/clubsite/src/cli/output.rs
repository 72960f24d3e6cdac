//! Text output for the operator commands.

use std::fmt::Write;

use crate::content::{AuditReport, Catalog};
use crate::error::Result;
use crate::model::Project;

use super::OutputFormat;

/// Render a project listing.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_projects(
    projects: &[&Project],
    catalog: &Catalog,
    format: OutputFormat,
) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(projects)?);
    }

    if projects.is_empty() {
        return Ok("No projects found\n".to_string());
    }

    let group_of = |p: &Project| catalog.group_name(&p.group_id).unwrap_or("-").to_string();
    let mut out = String::new();

    match format {
        OutputFormat::Table => {
            let rows: Vec<[String; 4]> = projects
                .iter()
                .map(|&p| {
                    [
                        p.title.clone(),
                        group_of(p),
                        p.status.label().to_string(),
                        p.tags.join(", "),
                    ]
                })
                .collect();
            let header = ["TITLE", "GROUP", "STATUS", "TAGS"];
            let mut widths = header.map(str::len);
            for row in &rows {
                for (width, cell) in widths.iter_mut().zip(row) {
                    *width = (*width).max(cell.chars().count());
                }
            }

            let mut line = |cells: [&str; 4]| {
                let _ = writeln!(
                    out,
                    "{:<w0$}  {:<w1$}  {:<w2$}  {}",
                    cells[0],
                    cells[1],
                    cells[2],
                    cells[3],
                    w0 = widths[0],
                    w1 = widths[1],
                    w2 = widths[2],
                );
            };
            line(header);
            for row in &rows {
                line([row[0].as_str(), row[1].as_str(), row[2].as_str(), row[3].as_str()]);
            }
        }
        OutputFormat::Plain | OutputFormat::Json => {
            for &p in projects {
                let _ = writeln!(
                    out,
                    "{} [{}] ({})",
                    p.title,
                    p.status.label(),
                    group_of(p)
                );
            }
        }
    }

    let _ = writeln!(out, "\n{} project(s)", projects.len());
    Ok(out)
}

/// Render the findings of a fixture audit.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_audit(report: &AuditReport, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(report)?);
    }

    if report.is_clean() {
        return Ok("Fixtures OK: no dangling references or duplicate ids.\n".to_string());
    }

    let mut out = String::new();
    if !report.dangling.is_empty() {
        let _ = writeln!(out, "Dangling group references:");
        for d in &report.dangling {
            let _ = writeln!(out, "  {} {} -> {}", d.kind, d.id, d.group_id);
        }
    }
    if !report.duplicates.is_empty() {
        let _ = writeln!(out, "Duplicate ids:");
        for d in &report.duplicates {
            let _ = writeln!(out, "  {} {}", d.kind, d.id);
        }
    }
    Ok(out)
}

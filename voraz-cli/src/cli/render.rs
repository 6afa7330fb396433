//! Text and JSON rendering of computed tours.

use std::io::{self, Write};

use serde::Serialize;
use voraz_core::{SelectionMode, TourResponse, TourResult};

use super::commands::{ExecutionSummary, OutputFormat};

#[derive(Serialize)]
struct JsonSummary<'a> {
    data_source: &'a str,
    labels: &'a [String],
    tours: Vec<JsonTour>,
}

#[derive(Serialize)]
struct JsonTour {
    mode: SelectionMode,
    #[serde(flatten)]
    response: TourResponse,
}

/// Renders `summary` to `writer` in the format it requests.
///
/// # Errors
/// Returns [`io::Error`] if writing or JSON encoding fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use voraz_cli::cli::{ExecutionSummary, OutputFormat, render_summary};
/// # use voraz_core::{SelectionMode, TourEdge, compute_greedy_tour};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let edges = [
///     TourEdge::new(0, 1, 2.0),
///     TourEdge::new(1, 2, 2.0),
///     TourEdge::new(0, 2, 2.0),
/// ];
/// let summary = ExecutionSummary {
///     data_source: "demo".into(),
///     labels: vec!["A".into(), "B".into(), "C".into()],
///     format: OutputFormat::Text,
///     tours: vec![compute_greedy_tour(&edges, 3, SelectionMode::Min)],
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("1. A -> B: 2"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, writer: impl Write) -> io::Result<()> {
    match summary.format {
        OutputFormat::Text => render_text(summary, writer),
        OutputFormat::Json => render_json(summary, writer),
    }
}

fn render_text(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "locations: {}", summary.labels.len())?;
    for tour in &summary.tours {
        writeln!(writer)?;
        render_tour(tour, &summary.labels, &mut writer)?;
    }
    Ok(())
}

fn render_tour(tour: &TourResult, labels: &[String], mut writer: impl Write) -> io::Result<()> {
    let heading = match tour.mode() {
        SelectionMode::Min => "shortest",
        SelectionMode::Max => "longest",
    };
    writeln!(writer, "{heading} tour ({})", tour.mode())?;
    writeln!(writer, "cost: {}", tour.cost())?;
    let completeness = if tour.is_complete() {
        "complete"
    } else {
        "incomplete"
    };
    writeln!(writer, "status: {completeness}")?;
    for (index, step) in tour.details().iter().enumerate() {
        writeln!(
            writer,
            "{}. {} -> {}: {}",
            index + 1,
            label(labels, step.from()),
            label(labels, step.to()),
            step.distance()
        )?;
    }
    Ok(())
}

fn render_json(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let document = JsonSummary {
        data_source: &summary.data_source,
        labels: &summary.labels,
        tours: summary
            .tours
            .iter()
            .map(|tour| JsonTour {
                mode: tour.mode(),
                response: TourResponse::from(tour),
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut writer, &document).map_err(io::Error::other)?;
    writeln!(writer)
}

fn label(labels: &[String], node: usize) -> String {
    labels
        .get(node)
        .cloned()
        .unwrap_or_else(|| format!("#{node}"))
}

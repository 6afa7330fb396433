//! Distance matrix loaded from delimited text.
use std::{
    collections::{BTreeSet, HashSet},
    fs::File,
    io::Read,
    path::Path,
};

use tracing::debug;
use voraz_core::{SelectionMode, TourEdge, TourRequest};

use crate::{
    delimiter::Delimiter,
    errors::DistanceMatrixError,
    parse::{parse_distance, read_records},
};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Labelled locations and the tour edges between them.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    name: String,
    labels: Vec<String>,
    edges: Vec<TourEdge>,
}

impl DistanceMatrix {
    /// Parses a matrix held in memory.
    ///
    /// Cells are read only above the diagonal of the sorted label order, so
    /// each unordered pair yields at most one edge. Blank, unparsable,
    /// non-finite, and non-positive cells are skipped.
    ///
    /// # Errors
    /// Returns [`DistanceMatrixError::TooFewRows`] when the text has no data
    /// row after the header.
    ///
    /// # Examples
    /// ```
    /// use voraz_providers_matrix::{Delimiter, DistanceMatrix};
    ///
    /// let text = "from,Cusco,Lima,Puno\nCusco,,1100,390\nLima,1100,,1300\n";
    /// let matrix = DistanceMatrix::try_from_str("peru", text, Delimiter::Auto)?;
    /// assert_eq!(matrix.labels(), ["Cusco", "Lima", "Puno"]);
    /// assert_eq!(matrix.edges().len(), 3);
    /// # Ok::<(), voraz_providers_matrix::DistanceMatrixError>(())
    /// ```
    pub fn try_from_str(
        name: impl Into<String>,
        text: &str,
        delimiter: Delimiter,
    ) -> Result<Self, DistanceMatrixError> {
        Self::from_text(name.into(), text, delimiter)
    }

    /// Parses a matrix from a reader holding UTF-8 text.
    ///
    /// # Errors
    /// Returns [`DistanceMatrixError::Io`] when reading fails or the input is
    /// not UTF-8, [`DistanceMatrixError::Csv`] when a record cannot be read,
    /// and [`DistanceMatrixError::TooFewRows`] when there is no data row.
    pub fn try_from_reader<R: Read>(
        name: impl Into<String>,
        mut reader: R,
        delimiter: Delimiter,
    ) -> Result<Self, DistanceMatrixError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_text(name.into(), &text, delimiter)
    }

    /// Parses the matrix stored at `path`.
    ///
    /// # Errors
    /// Returns [`DistanceMatrixError::Io`] when the file cannot be read and
    /// [`DistanceMatrixError::TooFewRows`] when there is no data row.
    pub fn try_from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
        delimiter: Delimiter,
    ) -> Result<Self, DistanceMatrixError> {
        let file = File::open(path)?;
        Self::try_from_reader(name, file, delimiter)
    }

    fn from_text(
        name: String,
        text: &str,
        delimiter: Delimiter,
    ) -> Result<Self, DistanceMatrixError> {
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
        let header_line = text
            .lines()
            .find(|line| !line.trim().is_empty())
            .unwrap_or_default();
        let separator = delimiter.resolve(header_line);

        let records = read_records(text, separator)?;
        let Some((header, body)) = records.split_first() else {
            return Err(DistanceMatrixError::TooFewRows { rows: 0 });
        };
        if body.is_empty() {
            return Err(DistanceMatrixError::TooFewRows { rows: 1 });
        }

        let destinations = header.get(1..).unwrap_or_default();
        let labels = collect_labels(destinations, body);
        let mut edges = Vec::new();
        let mut seen = HashSet::new();
        let mut skipped = 0_usize;

        for row in body {
            let Some(origin) = row.first().and_then(|label| index_of(&labels, label)) else {
                continue;
            };
            for (column, destination) in destinations.iter().enumerate() {
                let Some(target) = index_of(&labels, destination) else {
                    continue;
                };
                if origin >= target {
                    continue;
                }
                let cell = row.get(column + 1).map_or("", String::as_str);
                let Some(distance) = parse_distance(cell) else {
                    skipped += 1;
                    continue;
                };
                if seen.insert((origin, target)) {
                    edges.push(TourEdge::new(origin, target, distance));
                }
            }
        }

        debug!(
            matrix = %name,
            separator = %char::from(separator),
            labels = labels.len(),
            edges = edges.len(),
            skipped,
            "loaded distance matrix"
        );
        Ok(Self {
            name,
            labels,
            edges,
        })
    }

    /// Returns the matrix name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the location labels in node-id order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the label of node `index`.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Returns the edges read from the matrix.
    #[must_use]
    pub fn edges(&self) -> &[TourEdge] {
        &self.edges
    }

    /// Returns the number of locations.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Builds a tour request over every location.
    #[must_use]
    pub fn request(&self, mode: SelectionMode) -> TourRequest {
        TourRequest::new(self.edges.clone(), self.node_count(), mode)
    }
}

fn collect_labels(destinations: &[String], body: &[Vec<String>]) -> Vec<String> {
    let origins = body.iter().filter_map(|row| row.first());
    destinations
        .iter()
        .chain(origins)
        .filter(|label| !label.is_empty())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn index_of(labels: &[String], label: &str) -> Option<usize> {
    labels
        .binary_search_by(|candidate| candidate.as_str().cmp(label))
        .ok()
}

use voraz_core::TourEdge;

/// Builds edges from `(u, v, w)` triples.
#[must_use]
pub fn edges(raw: &[(usize, usize, f64)]) -> Vec<TourEdge> {
    raw.iter()
        .map(|&(source, target, weight)| TourEdge::new(source, target, weight))
        .collect()
}

/// Four nodes on a square with weight 10 sides and weight 15 diagonals.
#[must_use]
pub fn square_with_diagonals() -> Vec<TourEdge> {
    edges(&[
        (0, 1, 10.0),
        (1, 2, 10.0),
        (2, 3, 10.0),
        (3, 0, 10.0),
        (0, 2, 15.0),
        (1, 3, 15.0),
    ])
}

/// Every pair of `node_count` nodes with weight `|i - j|`.
#[must_use]
pub fn complete_line_metric(node_count: usize) -> Vec<TourEdge> {
    let mut all = Vec::new();
    for source in 0..node_count {
        for target in (source + 1)..node_count {
            let gap = u32::try_from(target - source).expect("node gap fits in u32");
            all.push(TourEdge::new(source, target, f64::from(gap)));
        }
    }
    all
}

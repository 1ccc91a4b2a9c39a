use crate::fragment::Fragment;

/// A visual text line: fragments judged to lie on the same row of the page,
/// sorted left-to-right by their left edge.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    /// Fragments in this row, sorted ascending by `bbox.x0`.
    pub fragments: Vec<Fragment>,
}

impl Row {
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }
}

/// Cluster fragments into top-to-bottom rows by vertical proximity.
///
/// Fragments are sorted ascending by `mid_y`, then walked with a current-row
/// accumulator. Each fragment's `mid_y` is compared to the `mid_y` of the
/// **last fragment added to the current row** — not a row average — and
/// joins the row when the absolute difference is within `y_tolerance`;
/// otherwise the row closes and a new one starts.
///
/// The chained anchor means a smooth sequence of small baseline drifts stays
/// in one row even when the first and last member differ by more than
/// `y_tolerance`. That chain drift is accepted behavior; a centroid or
/// interval-merge rule would change observable grouping.
///
/// O(n log n), dominated by the sort. Deterministic: fragments with equal
/// `mid_y` keep their relative input order (stable sort). `y_tolerance` of
/// zero groups only fragments with exactly equal `mid_y`.
///
/// Each returned row's members are sorted ascending by `x0` as a post-step;
/// rows come out ordered by the `mid_y` of their first-inserted member.
pub fn group_into_rows(fragments: Vec<Fragment>, y_tolerance: f64) -> Vec<Row> {
    if fragments.is_empty() {
        return Vec::new();
    }

    let mut sorted = fragments;
    sorted.sort_by(|a, b| {
        a.bbox
            .mid_y()
            .partial_cmp(&b.bbox.mid_y())
            .expect("fragment mid_y is not NaN")
    });

    let mut rows: Vec<Row> = Vec::new();
    let mut current: Vec<Fragment> = Vec::new();

    for frag in sorted {
        match current.last() {
            Some(last) if (frag.bbox.mid_y() - last.bbox.mid_y()).abs() <= y_tolerance => {
                current.push(frag);
            }
            Some(_) => {
                rows.push(Row {
                    fragments: std::mem::take(&mut current),
                });
                current.push(frag);
            }
            None => current.push(frag),
        }
    }
    if !current.is_empty() {
        rows.push(Row { fragments: current });
    }

    // Left-to-right reading order within each row, independent of grouping.
    for row in &mut rows {
        row.fragments.sort_by(|a, b| {
            a.bbox
                .x0
                .partial_cmp(&b.bbox.x0)
                .expect("fragment x0 is not NaN")
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn frag(text: &str, x: f64, y: f64, w: f64, h: f64) -> Fragment {
        Fragment::new(text, Rect::from_origin_size(x, y, w, h))
    }

    #[test]
    fn test_empty_input() {
        assert!(group_into_rows(Vec::new(), 10.0).is_empty());
    }

    #[test]
    fn test_single_fragment() {
        let rows = group_into_rows(vec![frag("only", 0.0, 0.0, 10.0, 10.0)], 10.0);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[0].fragments[0].text, "only");
    }

    #[test]
    fn test_two_rows_two_columns() {
        let rows = group_into_rows(
            vec![
                frag("Name", 0.0, 0.0, 40.0, 10.0),
                frag("Age", 200.0, 0.0, 30.0, 10.0),
                frag("John", 0.0, 20.0, 40.0, 10.0),
                frag("25", 200.0, 20.0, 20.0, 10.0),
            ],
            10.0,
        );
        assert_eq!(rows.len(), 2);
        let texts: Vec<Vec<&str>> = rows
            .iter()
            .map(|r| r.fragments.iter().map(|f| f.text.as_str()).collect())
            .collect();
        assert_eq!(texts, vec![vec!["Name", "Age"], vec!["John", "25"]]);
    }

    #[test]
    fn test_rows_sorted_left_to_right() {
        // Given right-to-left, members come out sorted by x0
        let rows = group_into_rows(
            vec![
                frag("b", 100.0, 0.0, 10.0, 10.0),
                frag("a", 0.0, 0.0, 10.0, 10.0),
            ],
            5.0,
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].fragments[0].text, "a");
        assert_eq!(rows[0].fragments[1].text, "b");
    }

    #[test]
    fn test_rows_ordered_top_to_bottom() {
        let rows = group_into_rows(
            vec![
                frag("low", 0.0, 100.0, 10.0, 10.0),
                frag("high", 0.0, 0.0, 10.0, 10.0),
                frag("mid", 0.0, 50.0, 10.0, 10.0),
            ],
            5.0,
        );
        let texts: Vec<&str> = rows
            .iter()
            .map(|r| r.fragments[0].text.as_str())
            .collect();
        assert_eq!(texts, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_tolerance_boundary_inclusive() {
        // mid_y difference exactly equal to the tolerance groups together
        let a = frag("a", 0.0, 0.0, 10.0, 10.0); // mid_y = 5
        let b = frag("b", 20.0, 10.0, 10.0, 10.0); // mid_y = 15
        let rows = group_into_rows(vec![a.clone(), b.clone()], 10.0);
        assert_eq!(rows.len(), 1);

        // ...and a hair past it splits
        let c = frag("c", 20.0, 10.2, 10.0, 10.0); // mid_y = 15.2
        let rows = group_into_rows(vec![a, c], 10.0);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_zero_tolerance_exact_grouping() {
        let rows = group_into_rows(
            vec![
                frag("a", 0.0, 0.0, 10.0, 10.0),
                frag("b", 20.0, 0.0, 10.0, 10.0),
                frag("c", 0.0, 0.1, 10.0, 10.0),
            ],
            0.0,
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1].fragments[0].text, "c");
    }

    #[test]
    fn test_anchor_is_last_member_not_first() {
        // mid_ys 5, 13, 21: each consecutive pair is within tolerance 8,
        // first-to-last is not. Chained anchor keeps all three together.
        let rows = group_into_rows(
            vec![
                frag("a", 0.0, 0.0, 10.0, 10.0),
                frag("b", 20.0, 8.0, 10.0, 10.0),
                frag("c", 40.0, 16.0, 10.0, 10.0),
            ],
            8.0,
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 3);
    }

    #[test]
    fn test_grouping_is_deterministic() {
        let fragments = vec![
            frag("w", 30.0, 4.0, 10.0, 10.0),
            frag("x", 0.0, 0.0, 10.0, 10.0),
            frag("y", 10.0, 25.0, 10.0, 10.0),
            frag("z", 5.0, 3.0, 10.0, 10.0),
        ];
        let first = group_into_rows(fragments.clone(), 6.0);
        let second = group_into_rows(fragments, 6.0);
        assert_eq!(first, second);
    }
}

//! Property-based tests for the table engine.
//!
//! These tests use proptest to generate random tables and verify that
//! selection, reshaping and concatenation keep their invariants.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p tabula --test property_tests
//!
//! # More cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p tabula --test property_tests
//! ```

use std::collections::HashSet;

use proptest::prelude::*;

use tabula::{Axis, CellValue, LabeledAxis, Table, concat};

// =============================================================================
// Test Strategies
// =============================================================================

/// A small label alphabet so duplicates are common.
fn label() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        "[a-e]".prop_map(CellValue::from),
        (0i64..4).prop_map(CellValue::from),
    ]
}

/// Any cell, absent included.
fn cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        "[a-z0-9]{0,6}".prop_map(CellValue::from),
        any::<i64>().prop_map(CellValue::from),
        Just(CellValue::Absent),
    ]
}

/// A table of up to 6x5 cells with possibly repeating labels.
fn table() -> impl Strategy<Value = Table> {
    (0usize..6, 0usize..5).prop_flat_map(|(rows, cols)| {
        (
            prop::collection::vec(label(), rows),
            prop::collection::vec(label(), cols),
            prop::collection::vec(prop::collection::vec(cell(), cols), rows),
        )
            .prop_map(|(index, header, body)| {
                Table::from_parts(
                    LabeledAxis::from_labels(index, "Index"),
                    LabeledAxis::from_labels(header, "Columns"),
                    body,
                )
                .expect("generated shape is consistent")
            })
    })
}

fn side() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::Row), Just(Axis::Column)]
}

/// Body rows agree with both axis lengths.
fn assert_rectangular(t: &Table) {
    assert_eq!(t.body().len(), t.row_count());
    assert!(t.body().iter().all(|r| r.len() == t.column_count()));
}

// =============================================================================
// Labeled Axis Properties
// =============================================================================

proptest! {
    /// The position lookup partitions the axis exactly.
    #[test]
    fn positions_partition_axis(labels in prop::collection::vec(label(), 0..20)) {
        let axis = LabeledAxis::from_labels(labels.clone(), "x");
        let mut seen = Vec::new();
        for unique in axis.unique_labels() {
            let positions = axis.get(&unique).unwrap();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            for &p in positions {
                prop_assert_eq!(&labels[p], &unique);
            }
            seen.extend_from_slice(positions);
        }
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..labels.len()).collect::<Vec<_>>());
    }
}

// =============================================================================
// Selection Properties
// =============================================================================

proptest! {
    /// Transposing twice gives back the same table.
    #[test]
    fn transpose_is_involution(t in table()) {
        let twice = t.transpose().transpose();
        prop_assert_eq!(twice, t);
    }

    /// A positional pick carries the label found at that position.
    #[test]
    fn position_pick_keeps_label(t in table(), side in side()) {
        for position in 0..t.len(side) {
            let picked = t.slice_by_position(side, [position]).unwrap();
            prop_assert_eq!(picked.len(side), 1);
            prop_assert_eq!(&picked.axis(side).labels()[0], &t.axis(side).labels()[position]);
            assert_rectangular(&picked);
        }
    }

    /// Selecting every distinct label returns every line exactly once.
    #[test]
    fn label_selection_covers_axis(t in table(), side in side()) {
        let picked = t.slice_by_label(side, t.axis(side).unique_labels()).unwrap();
        prop_assert_eq!(picked.len(side), t.len(side));
        prop_assert_eq!(picked.len(side.opposite()), t.len(side.opposite()));
        assert_rectangular(&picked);
    }

    /// Out-of-range positions fail instead of panicking.
    #[test]
    fn out_of_range_position_fails(t in table(), side in side(), extra in 0usize..3) {
        let position = t.len(side) + extra;
        prop_assert!(t.slice_by_position(side, [position]).is_err());
    }

    /// The paired slice returns at least one entry per requested label and
    /// never fails.
    #[test]
    fn paired_slice_covers_request(
        t in table(),
        side in side(),
        wanted in prop::collection::vec(label(), 0..6),
    ) {
        let (labels, lines) = t.paired_slice_by_label(side, wanted.clone());
        prop_assert_eq!(labels.len(), lines.len());
        prop_assert!(lines.iter().all(|l| l.len() == t.len(side.opposite())));
        let expected: usize = wanted
            .iter()
            .map(|l| t.axis(side).get(l).map_or(1, <[usize]>::len))
            .sum();
        prop_assert_eq!(labels.len(), expected);
    }
}

// =============================================================================
// Concatenation Properties
// =============================================================================

proptest! {
    /// Stacked labels are the concatenation of the inputs' labels and the
    /// aligned axis holds every input label.
    #[test]
    fn concat_shape(a in table(), b in table(), side in side()) {
        let joined = concat(side, [&a, &b]).unwrap();
        assert_rectangular(&joined);

        let stacked: Vec<CellValue> = a.axis(side).labels().iter()
            .chain(b.axis(side).labels())
            .cloned()
            .collect();
        prop_assert_eq!(joined.axis(side).labels(), &stacked[..]);

        let aligned: HashSet<&CellValue> = joined.axis(side.opposite()).labels().iter().collect();
        let opposite = side.opposite();
        for label in a.axis(opposite).labels().iter().chain(b.axis(opposite).labels()) {
            prop_assert!(aligned.contains(label));
        }
        let unique: HashSet<&CellValue> = joined.axis(opposite).labels().iter().collect();
        prop_assert_eq!(unique.len(), joined.len(opposite));
    }

    /// Building from a label map keeps the map's order and shape.
    #[test]
    fn label_map_construction(
        side in side(),
        width in 0usize..4,
        keys in prop::collection::hash_set("[a-z]{1,4}", 0..6),
    ) {
        let entries: Vec<(String, Vec<CellValue>)> = keys
            .into_iter()
            .map(|k| (k, vec![CellValue::Absent; width]))
            .collect();
        let t = Table::from_label_map(side, entries.clone()).unwrap();
        assert_rectangular(&t);
        prop_assert_eq!(t.len(side), entries.len());
        for (i, (key, _)) in entries.iter().enumerate() {
            prop_assert_eq!(&t.axis(side).labels()[i], &CellValue::from(key.as_str()));
        }
        if !entries.is_empty() {
            prop_assert_eq!(t.len(side.opposite()), width);
        }
    }
}

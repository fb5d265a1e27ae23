//! Property tests for the row-to-document mapping.

use proptest::prelude::*;

use tlxml_map::{build_requirements, build_testcases, format_doc_id, steps_from_row};
use tlxml_model::{ConversionConfig, Row};

const HEADER_MARKER: &str = "__header__";

fn field() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-z]{1,6}"]
}

fn data_row() -> impl Strategy<Value = Row> {
    prop::collection::vec(field(), 0..12).prop_map(Row::new)
}

fn rows_with_header() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(data_row(), 0..20).prop_map(|data| {
        let header: Row = std::iter::repeat_n(HEADER_MARKER, 8).collect();
        std::iter::once(header).chain(data).collect()
    })
}

proptest! {
    #[test]
    fn header_never_appears(rows in rows_with_header()) {
        let doc = build_testcases(&rows);
        for testcase in &doc.testcases {
            prop_assert_ne!(testcase.name.as_str(), HEADER_MARKER);
        }
        let doc = build_requirements(&rows, &ConversionConfig::requirements());
        for requirement in &doc.requirements {
            prop_assert_ne!(requirement.title.as_str(), HEADER_MARKER);
        }
    }

    #[test]
    fn one_testcase_per_named_row(rows in rows_with_header()) {
        let expected = rows.iter().skip(1).filter(|r| !r.field(0).is_empty()).count();
        prop_assert_eq!(build_testcases(&rows).testcases.len(), expected);
    }

    #[test]
    fn step_numbers_are_contiguous(row in data_row()) {
        let numbers: Vec<u32> = steps_from_row(&row).iter().map(|s| s.number).collect();
        let expected: Vec<u32> = (1..=numbers.len() as u32).collect();
        prop_assert_eq!(numbers, expected);
    }

    #[test]
    fn step_emitted_iff_pair_has_content(row in data_row()) {
        let non_empty_pairs = (3..row.len())
            .step_by(2)
            .filter(|&i| row.has_value(i) || row.has_value(i + 1))
            .count();
        prop_assert_eq!(steps_from_row(&row).len(), non_empty_pairs);
    }

    #[test]
    fn doc_id_is_at_least_four_digits(line in 0usize..100_000) {
        let id = format_doc_id("", line);
        prop_assert!(id.len() >= 4);
        prop_assert_eq!(id.parse::<usize>().unwrap(), line);
        let prefixed = format_doc_id("REQ", line);
        prop_assert_eq!(prefixed, format!("REQ-{id}"));
    }

    #[test]
    fn building_is_deterministic(rows in rows_with_header()) {
        prop_assert_eq!(build_testcases(&rows), build_testcases(&rows));
    }
}

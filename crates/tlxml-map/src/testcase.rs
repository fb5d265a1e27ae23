use tracing::debug;

use tlxml_model::{CustomField, Row, Step, Testcase, TestcaseDocument, columns};

use crate::data_rows;

/// Build a testcase document from all rows, header included.
pub fn build_testcases(rows: &[Row]) -> TestcaseDocument {
    let testcases = data_rows(rows)
        .filter_map(|(line, row)| {
            let testcase = testcase_from_row(row);
            if testcase.is_none() {
                debug!(line, "skipping row without testcase name");
            }
            testcase
        })
        .collect();
    TestcaseDocument { testcases }
}

/// Map one data row to a testcase. Returns `None` when the name is empty.
pub fn testcase_from_row(row: &Row) -> Option<Testcase> {
    if !row.has_value(columns::NAME) {
        return None;
    }
    Some(Testcase {
        name: row.field(columns::NAME).to_string(),
        summary: row.field(columns::SUMMARY).to_string(),
        steps: steps_from_row(row),
        custom_fields: vec![CustomField::comments(row.field(columns::COMMENTS))],
    })
}

/// Collect the step pairs of a row.
///
/// Pairs where both actions and expected results are empty are skipped and
/// do not consume a step number.
pub fn steps_from_row(row: &Row) -> Vec<Step> {
    let mut steps = Vec::new();
    let mut number = 1;
    for actions_idx in (columns::FIRST_STEP..row.len()).step_by(2) {
        let results_idx = actions_idx + 1;
        if !row.has_value(actions_idx) && !row.has_value(results_idx) {
            continue;
        }
        steps.push(Step {
            number,
            actions: row.field(actions_idx).to_string(),
            expected_results: row.field(results_idx).to_string(),
        });
        number += 1;
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Row {
        fields.iter().copied().collect()
    }

    #[test]
    fn header_is_never_converted() {
        let rows = vec![row(&["Name", "Summary", "Comments", "Action", "Result"])];
        assert!(build_testcases(&rows).testcases.is_empty());
    }

    #[test]
    fn rows_without_name_are_dropped() {
        let rows = vec![
            row(&["Name", "Summary", "Comments"]),
            row(&["", "orphan summary", "note"]),
            row(&["Login", "User logs in", "note"]),
        ];
        let doc = build_testcases(&rows);
        assert_eq!(doc.testcases.len(), 1);
        assert_eq!(doc.testcases[0].name, "Login");
    }

    #[test]
    fn empty_action_with_result_still_emits_step() {
        let r = row(&["Name", "Summary", "Comments", "Act1", "Res1", "", "Res2"]);
        let steps = steps_from_row(&r);
        assert_eq!(
            steps,
            vec![
                Step {
                    number: 1,
                    actions: "Act1".to_string(),
                    expected_results: "Res1".to_string(),
                },
                Step {
                    number: 2,
                    actions: String::new(),
                    expected_results: "Res2".to_string(),
                },
            ]
        );
    }

    #[test]
    fn empty_pairs_do_not_advance_numbering() {
        let r = row(&["N", "S", "C", "", "", "Act2", "", "", "", "", "Res5"]);
        let numbers: Vec<u32> = steps_from_row(&r).iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn trailing_action_without_result_column() {
        let r = row(&["N", "S", "C", "Act1", "Res1", "Act2"]);
        let steps = steps_from_row(&r);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].actions, "Act2");
        assert_eq!(steps[1].expected_results, "");
    }

    #[test]
    fn short_row_gets_empty_comments() {
        let t = testcase_from_row(&row(&["Login"])).unwrap();
        assert_eq!(t.summary, "");
        assert!(t.steps.is_empty());
        assert_eq!(t.custom_fields, vec![CustomField::comments("")]);
    }

    #[test]
    fn comments_come_from_third_column() {
        let t = testcase_from_row(&row(&["Login", "Summary", "flaky on CI"])).unwrap();
        assert_eq!(t.custom_fields.len(), 1);
        assert_eq!(t.custom_fields[0].name, "Comments");
        assert_eq!(t.custom_fields[0].value, "flaky on CI");
    }
}

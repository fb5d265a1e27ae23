//! Tests for tlxml-model types.

use tlxml_model::{
    COMMENTS_FIELD, CustomField, Document, Requirement, RequirementDocument, Row, columns,
};

#[test]
fn comments_custom_field() {
    let field = CustomField::comments("needs review");
    assert_eq!(field.name, COMMENTS_FIELD);
    assert_eq!(field.value, "needs review");
}

#[test]
fn requirement_document_len() {
    let doc = Document::Requirements(RequirementDocument {
        requirements: vec![
            Requirement {
                doc_id: "0001".to_string(),
                title: "Login".to_string(),
                ..Default::default()
            },
            Requirement {
                doc_id: "0002".to_string(),
                title: "Logout".to_string(),
                ..Default::default()
            },
        ],
    });
    assert_eq!(doc.len(), 2);
}

#[test]
fn row_from_owned_fields() {
    let row = Row::from(vec!["a".to_string(), String::new(), "c".to_string()]);
    assert_eq!(row.field(columns::COMMENTS), "c");
    assert_eq!(row.field(columns::FIRST_STEP), "");
    assert_eq!(row.fields().len(), 3);
}

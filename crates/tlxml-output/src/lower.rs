//! Lowering of typed documents into generic element trees.

use tlxml_model::{
    CustomField, Document, Requirement, RequirementDocument, Step, Testcase, TestcaseDocument,
};

use crate::tree::XmlElement;

/// Conversion of a model value into an [`XmlElement`].
pub trait ToXmlTree {
    fn to_xml_tree(&self) -> XmlElement;
}

fn lower_all<T: ToXmlTree>(items: &[T]) -> Vec<XmlElement> {
    items.iter().map(ToXmlTree::to_xml_tree).collect()
}

impl ToXmlTree for Document {
    fn to_xml_tree(&self) -> XmlElement {
        match self {
            Self::Testcases(doc) => doc.to_xml_tree(),
            Self::Requirements(doc) => doc.to_xml_tree(),
        }
    }
}

impl ToXmlTree for TestcaseDocument {
    fn to_xml_tree(&self) -> XmlElement {
        XmlElement::parent("testcases", lower_all(&self.testcases))
    }
}

impl ToXmlTree for Testcase {
    fn to_xml_tree(&self) -> XmlElement {
        XmlElement::parent(
            "testcase",
            vec![
                XmlElement::text("summary", self.summary.as_str()),
                XmlElement::parent("steps", lower_all(&self.steps)),
                XmlElement::parent("custom_fields", lower_all(&self.custom_fields)),
            ],
        )
        .with_attribute("name", self.name.as_str())
    }
}

impl ToXmlTree for Step {
    fn to_xml_tree(&self) -> XmlElement {
        XmlElement::parent(
            "step",
            vec![
                XmlElement::text("step_number", self.number.to_string()),
                XmlElement::text("actions", self.actions.as_str()),
                XmlElement::text("expectedresults", self.expected_results.as_str()),
            ],
        )
    }
}

impl ToXmlTree for CustomField {
    fn to_xml_tree(&self) -> XmlElement {
        XmlElement::parent(
            "custom_field",
            vec![
                XmlElement::text("name", self.name.as_str()),
                XmlElement::text("value", self.value.as_str()),
            ],
        )
    }
}

impl ToXmlTree for RequirementDocument {
    fn to_xml_tree(&self) -> XmlElement {
        XmlElement::parent("requirements", lower_all(&self.requirements))
    }
}

impl ToXmlTree for Requirement {
    fn to_xml_tree(&self) -> XmlElement {
        let mut children = vec![
            XmlElement::text("docid", self.doc_id.as_str()),
            XmlElement::text("title", self.title.as_str()),
            XmlElement::text("description", self.description.as_str()),
        ];
        if let Some(coverage) = &self.expected_coverage {
            children.push(XmlElement::text("expected_coverage", coverage.as_str()));
        }
        children.push(XmlElement::parent(
            "custom_fields",
            lower_all(&self.custom_fields),
        ));
        XmlElement::parent("requirement", children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testcase_name_is_an_attribute() {
        let testcase = Testcase {
            name: "Login".to_string(),
            summary: "User logs in".to_string(),
            steps: vec![Step {
                number: 1,
                actions: "Open page".to_string(),
                expected_results: "Page shown".to_string(),
            }],
            custom_fields: vec![CustomField::comments("")],
        };
        let tree = testcase.to_xml_tree();

        assert_eq!(tree.name, "testcase");
        assert_eq!(tree.attribute("name"), Some("Login"));
        assert!(tree.child("name").is_none());
        let names: Vec<&str> = tree.children().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["summary", "steps", "custom_fields"]);

        let step = &tree.child("steps").unwrap().children()[0];
        let step_names: Vec<&str> = step.children().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(step_names, ["step_number", "actions", "expectedresults"]);
        assert_eq!(
            step.child("step_number").and_then(XmlElement::text_content),
            Some("1")
        );
    }

    #[test]
    fn requirement_coverage_is_optional() {
        let mut requirement = Requirement {
            doc_id: "0001".to_string(),
            title: "Login".to_string(),
            ..Default::default()
        };
        assert!(requirement.to_xml_tree().child("expected_coverage").is_none());

        requirement.expected_coverage = Some("ts-4".to_string());
        let tree = requirement.to_xml_tree();
        let names: Vec<&str> = tree.children().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["docid", "title", "description", "expected_coverage", "custom_fields"]
        );
    }
}

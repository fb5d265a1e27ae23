//! Generic XML element tree.

/// Element content: either text or nested elements, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlContent {
    Text(String),
    Children(Vec<XmlElement>),
}

/// A single element with ordered attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub content: XmlContent,
}

impl XmlElement {
    /// An element holding only text.
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            content: XmlContent::Text(text.into()),
        }
    }

    /// An element holding child elements.
    pub fn parent(name: impl Into<String>, children: Vec<XmlElement>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            content: XmlContent::Children(children),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Child elements, empty for text elements.
    pub fn children(&self) -> &[XmlElement] {
        match &self.content {
            XmlContent::Children(children) => children,
            XmlContent::Text(_) => &[],
        }
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children().iter().find(|child| child.name == name)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Text content, `None` for parent elements.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            XmlContent::Text(text) => Some(text),
            XmlContent::Children(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_helpers() {
        let element = XmlElement::parent(
            "testcase",
            vec![
                XmlElement::text("summary", "s"),
                XmlElement::parent("steps", Vec::new()),
            ],
        )
        .with_attribute("name", "Login");

        assert_eq!(element.attribute("name"), Some("Login"));
        assert_eq!(element.attribute("missing"), None);
        assert_eq!(
            element.child("summary").and_then(XmlElement::text_content),
            Some("s")
        );
        assert!(element.child("steps").unwrap().children().is_empty());
        assert_eq!(element.text_content(), None);
    }
}

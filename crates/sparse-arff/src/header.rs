//! Attribute Header

use serde::{Deserialize, Serialize};

/// Dataset reader options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArffOptions {
    /// Attribute holding the class label (matched case-insensitively)
    pub class_attribute: String,
}

impl Default for ArffOptions {
    fn default() -> Self {
        Self {
            class_attribute: "class".to_string(),
        }
    }
}

/// Ordered attribute declarations of a dataset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
    label_index: Option<usize>,
}

impl Header {
    /// Build a header, locating the label attribute.
    ///
    /// The label is the last attribute whose name matches
    /// `options.class_attribute`; without a match it is the last attribute.
    pub fn new(names: Vec<String>, options: &ArffOptions) -> Self {
        let label_index = names
            .iter()
            .rposition(|n| n.eq_ignore_ascii_case(&options.class_attribute))
            .or_else(|| names.len().checked_sub(1));

        Self { names, label_index }
    }

    /// Attribute names in declaration order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of declared attributes
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Index of the class label attribute, `None` for an empty header
    pub fn label_index(&self) -> Option<usize> {
        self.label_index
    }

    /// Index of an attribute by exact name. A redeclared name resolves to
    /// its last declaration.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().rposition(|n| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Header {
        Header::new(
            names.iter().map(|s| s.to_string()).collect(),
            &ArffOptions::default(),
        )
    }

    #[test]
    fn test_class_attribute_is_label() {
        let h = header(&["class", "a0", "a1"]);
        assert_eq!(h.label_index(), Some(0));
    }

    #[test]
    fn test_class_match_ignores_case() {
        let h = header(&["a0", "CLASS", "a1"]);
        assert_eq!(h.label_index(), Some(1));
    }

    #[test]
    fn test_label_defaults_to_last() {
        let h = header(&["a0", "a1", "target"]);
        assert_eq!(h.label_index(), Some(2));
    }

    #[test]
    fn test_empty_header_has_no_label() {
        let h = header(&[]);
        assert!(h.is_empty());
        assert_eq!(h.label_index(), None);
    }

    #[test]
    fn test_index_of_redeclared_name() {
        let h = header(&["x", "y", "x"]);
        assert_eq!(h.index_of("x"), Some(2));
        assert_eq!(h.index_of("y"), Some(1));
        assert_eq!(h.index_of("z"), None);
    }
}

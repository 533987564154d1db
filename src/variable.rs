//! Objects allocated by the benchmark.

use crate::error::{BenchError, Result};

/// A named variable over a finite domain.
pub trait DiscreteVariable {
    fn name(&self) -> &str;

    /// Number of values the variable can take.
    fn domain_size(&self) -> usize;
}

/// Discrete variable whose values are string labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelizedVariable {
    name: String,
    labels: Vec<String>,
}

impl LabelizedVariable {
    /// Binary variable with labels `"0"` and `"1"`.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_domain_size(name, 2)
    }

    /// Variable with labels `"0"` to `"size - 1"`.
    pub fn with_domain_size(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            labels: (0..size).map(|i| i.to_string()).collect(),
        }
    }

    /// Variable without any label.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            labels: Vec::new(),
        }
    }

    pub fn add_label(&mut self, label: impl Into<String>) -> Result<()> {
        let label = label.into();
        if self.labels.contains(&label) {
            return Err(BenchError::DuplicateLabel {
                variable: self.name.clone(),
                label,
            });
        }
        self.labels.push(label);
        Ok(())
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl DiscreteVariable for LabelizedVariable {
    fn name(&self) -> &str {
        &self.name
    }

    fn domain_size(&self) -> usize {
        self.labels.len()
    }
}

/// Name of the variable stored under `index`.
pub fn variable_name(index: i64) -> String {
    format!("var_{index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_binary() {
        let var = LabelizedVariable::new("var_0");
        assert_eq!(var.name(), "var_0");
        assert_eq!(var.domain_size(), 2);
        assert_eq!(var.labels(), ["0", "1"]);
    }

    #[test]
    fn test_add_label_grows_domain() {
        let mut var = LabelizedVariable::empty("color");
        var.add_label("red").unwrap();
        var.add_label("green").unwrap();
        var.add_label("blue").unwrap();
        assert_eq!(var.domain_size(), 3);
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let mut var = LabelizedVariable::new("x");
        let err = var.add_label("1").unwrap_err();
        assert_eq!(
            err,
            BenchError::DuplicateLabel {
                variable: "x".to_string(),
                label: "1".to_string(),
            }
        );
        assert_eq!(var.domain_size(), 2);
    }

    #[test]
    fn test_variable_names_distinct() {
        assert_eq!(variable_name(7), "var_7");
        assert_ne!(variable_name(1), variable_name(10));
    }
}

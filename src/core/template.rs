//! Fixed-layout status line template.
//!
//! A template is literal text with `{}` placeholders, one per provider, for
//! example `T:{}|{} L:{} {}`. Positions are fixed: an empty value still
//! occupies its slot, so the separators around it stay put.

use crate::error::{Result, StatusError};

const PLACEHOLDER: &str = "{}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTemplate {
    // Always one more literal than placeholders
    literals: Vec<String>,
}

impl StatusTemplate {
    /// Parse a template. Placeholders must be separated by literal text.
    pub fn parse(template: &str) -> Result<Self> {
        let literals: Vec<String> = template.split(PLACEHOLDER).map(String::from).collect();

        let interior = literals.get(1..literals.len() - 1).unwrap_or(&[]);
        if let Some(pos) = interior.iter().position(String::is_empty) {
            return Err(StatusError::template(format!(
                "placeholders {} and {} in {:?} have no separator",
                pos,
                pos + 1,
                template
            )));
        }

        Ok(Self { literals })
    }

    pub fn placeholders(&self) -> usize {
        self.literals.len() - 1
    }

    /// Fill the placeholders in order with `values`.
    pub fn render<S: AsRef<str>>(&self, values: &[S]) -> Result<String> {
        if values.len() != self.placeholders() {
            return Err(StatusError::template(format!(
                "expected {} values, got {}",
                self.placeholders(),
                values.len()
            )));
        }

        let mut line = self.literals[0].clone();
        for (value, literal) in values.iter().zip(&self.literals[1..]) {
            line.push_str(value.as_ref());
            line.push_str(literal);
        }
        Ok(line)
    }

    /// Recover the values from a rendered line.
    ///
    /// Each value is taken up to the first occurrence of the literal that
    /// follows it, so this is exact whenever no value contains that literal.
    pub fn split(&self, line: &str) -> Option<Vec<String>> {
        let Some((last, middle)) = self.literals[1..].split_last() else {
            return (line == self.literals[0]).then(Vec::new);
        };
        let mut rest = line.strip_prefix(self.literals[0].as_str())?;
        let mut values = Vec::with_capacity(self.placeholders());

        for literal in middle {
            let end = rest.find(literal.as_str())?;
            values.push(rest[..end].to_string());
            rest = &rest[end + literal.len()..];
        }

        values.push(rest.strip_suffix(last.as_str())?.to_string());
        Some(values)
    }
}

//! Top-level variable declarations.

use std::fmt::{self, Display, Formatter};

/// A single `name = value` declaration.
///
/// Values are emitted verbatim; the builder performs no escaping or
/// validation of either side.
///
/// # Examples
///
/// ```rust
/// use ninjafile::Variable;
///
/// let var = Variable::new("cflags", "-O2 -Wall");
/// assert_eq!(var.to_string(), "cflags = -O2 -Wall\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    name: String,
    value: String,
}

impl Variable {
    /// Create a declaration binding `name` to `value`.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The variable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound value, exactly as supplied.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} = {}", self.name, self.value)
    }
}

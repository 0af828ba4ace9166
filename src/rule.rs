//! Rule declarations.

use crate::render::{write_flag, write_kv};
use std::fmt::{self, Display, Formatter};

/// A named command template.
///
/// Rules are created through [`crate::NinjaFile::rule`] and configured with
/// chained setters. Optional lines render in a fixed order (description,
/// restat, generator, pool, depfile) regardless of the order the setters were
/// called in.
///
/// # Examples
///
/// ```rust
/// use ninjafile::Rule;
///
/// let mut rule = Rule::new("cc");
/// rule.run("gcc -c $in -o $out").description("CC $out");
/// let text = rule.to_string();
/// assert!(text.starts_with("rule cc\n  command = gcc -c $in -o $out\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Rule {
    name: String,
    command: String,
    description: Option<String>,
    depfile: Option<String>,
    restat: bool,
    generator: bool,
    pool: Option<String>,
}

impl Rule {
    /// Create an empty rule named `name`.
    ///
    /// Rule names must be unique within a file for Ninja to accept the
    /// output; uniqueness is not enforced here.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The rule name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the command template.
    ///
    /// A rule that never receives a command renders with an empty
    /// `command =` line.
    pub fn run(&mut self, command: impl Into<String>) -> &mut Self {
        self.command = command.into();
        self
    }

    /// Set the human-readable description Ninja prints while running.
    pub fn description(&mut self, text: impl Into<String>) -> &mut Self {
        self.description = Some(text.into());
        self
    }

    /// Declare a dependency file produced by the command.
    ///
    /// Setting a depfile also emits `deps = gcc`, the marker for
    /// Makefile-style dependency output from C toolchains.
    pub fn depfile(&mut self, path: impl Into<String>) -> &mut Self {
        self.depfile = Some(path.into());
        self
    }

    /// Mark the rule as `restat`, so Ninja re-checks output timestamps after
    /// the command runs.
    pub fn restat(&mut self, restat: bool) -> &mut Self {
        self.restat = restat;
        self
    }

    /// Mark the rule as a `generator` of the build file itself.
    pub fn generator(&mut self, generator: bool) -> &mut Self {
        self.generator = generator;
        self
    }

    /// Run commands for this rule inside the named execution pool.
    pub fn pool(&mut self, name: impl Into<String>) -> &mut Self {
        self.pool = Some(name.into());
        self
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "rule {}", self.name)?;
        writeln!(f, "  command = {}", self.command)?;
        write_kv!(f, "description", &self.description);
        write_flag!(f, "restat", self.restat);
        write_flag!(f, "generator", self.generator);
        write_kv!(f, "pool", &self.pool);
        if let Some(depfile) = &self.depfile {
            writeln!(f, "  depfile = {depfile}")?;
            writeln!(f, "  deps = gcc")?;
        }
        Ok(())
    }
}

//! Top-level build-file builder.
//!
//! [`NinjaFile`] owns the rules, edges, and variables that make up one build
//! description and renders them in the section order Ninja expects: header,
//! version and builddir directives, rules, edges, top-level variables, and
//! finally the `default` directive. Rule definitions must precede the edges
//! that reference them, so this order is part of the output contract.

use crate::edge::Edge;
use crate::paths::IntoPaths;
use crate::rule::Rule;
use crate::variable::Variable;
use camino::{Utf8Path, Utf8PathBuf};
use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::{self, BufWriter};
use thiserror::Error;
use tracing::{debug, info};

/// Failure to write a rendered build file to disk.
#[derive(Debug, Error)]
#[error("write Ninja file to {path}")]
pub struct PersistError {
    path: Utf8PathBuf,
    #[source]
    source: io::Error,
}

impl PersistError {
    /// The destination that could not be written.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

/// Builder for one Ninja build description.
///
/// Children are created through the factory methods [`NinjaFile::rule`],
/// [`NinjaFile::edge`], and [`NinjaFile::assign`], which return the new child
/// for chained configuration. Rendering never mutates the model, so
/// rendering twice without intervening changes produces identical bytes.
///
/// # Examples
///
/// ```rust
/// use ninjafile::NinjaFile;
///
/// let mut ninja = NinjaFile::new();
/// ninja.rule("cc").run("gcc -c $in -o $out");
/// ninja.edge("out.o").using("cc").from("in.c");
/// let expected = concat!(
///     "rule cc\n",
///     "  command = gcc -c $in -o $out\n",
///     "build out.o: cc in.c\n",
/// );
/// assert_eq!(ninja.to_string(), expected);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NinjaFile {
    version: Option<String>,
    build_dir: Option<String>,
    header: Option<String>,
    default_target: Option<String>,
    rules: Vec<Rule>,
    edges: Vec<Edge>,
    variables: Vec<Variable>,
}

impl NinjaFile {
    /// Create an empty build description.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a minimum Ninja version via `ninja_required_version`.
    pub fn required_version(&mut self, version: impl Into<String>) -> &mut Self {
        self.version = Some(version.into());
        self
    }

    /// Set the `builddir` Ninja uses for its own bookkeeping files.
    pub fn build_dir(&mut self, dir: impl Into<String>) -> &mut Self {
        self.build_dir = Some(dir.into());
        self
    }

    /// Set free-form text emitted verbatim at the very top of the file,
    /// followed by a blank line. Typically a generated-file notice.
    pub fn header(&mut self, text: impl Into<String>) -> &mut Self {
        self.header = Some(text.into());
        self
    }

    /// Name the target built when Ninja is invoked with no arguments.
    pub fn by_default(&mut self, target: impl Into<String>) -> &mut Self {
        self.default_target = Some(target.into());
        self
    }

    /// Declare a top-level variable. Variables render after all edges.
    pub fn assign(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Variable {
        self.variables.push(Variable::new(name, value));
        self.variables.last_mut().expect("pushed above")
    }

    /// Declare a rule and return it for chained configuration.
    pub fn rule(&mut self, name: impl Into<String>) -> &mut Rule {
        self.rules.push(Rule::new(name));
        self.rules.last_mut().expect("pushed above")
    }

    /// Declare a build edge producing `targets` and return it for chained
    /// configuration. The edge starts bound to the `phony` rule.
    pub fn edge(&mut self, targets: impl IntoPaths) -> &mut Edge {
        self.edges.push(Edge::new(targets));
        self.edges.last_mut().expect("pushed above")
    }

    /// Render the document into `sink`.
    ///
    /// Writes happen in the fixed section order described at the module
    /// level. On failure the error propagates immediately; bytes already
    /// accepted by the sink are left as-is.
    ///
    /// # Errors
    ///
    /// Returns any [`io::Error`] reported by the sink.
    pub fn render_to<W: io::Write>(&self, mut sink: W) -> io::Result<()> {
        write!(sink, "{self}")
    }

    /// Render the document and write it to the file at `path`.
    ///
    /// Returns once the data has been flushed and the file handle closed.
    /// Existing content at `path` is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] if the file cannot be created or written.
    pub fn persist(&self, path: impl AsRef<Utf8Path>) -> Result<(), PersistError> {
        let path = path.as_ref();
        self.write_file(path).map_err(|source| PersistError {
            path: path.to_owned(),
            source,
        })?;
        info!("wrote Ninja file to {path}");
        Ok(())
    }

    fn write_file(&self, path: &Utf8Path) -> io::Result<()> {
        debug!(
            "rendering {} rules, {} edges, {} variables",
            self.rules.len(),
            self.edges.len(),
            self.variables.len(),
        );
        let mut sink = BufWriter::new(File::create(path)?);
        self.render_to(&mut sink)?;
        sink.into_inner().map_err(io::IntoInnerError::into_error)?;
        Ok(())
    }
}

impl Display for NinjaFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(header) = &self.header {
            writeln!(f, "{header}")?;
            writeln!(f)?;
        }
        if let Some(version) = &self.version {
            writeln!(f, "ninja_required_version = {version}")?;
        }
        if let Some(dir) = &self.build_dir {
            writeln!(f, "builddir={dir}")?;
        }
        for rule in &self.rules {
            write!(f, "{rule}")?;
        }
        for edge in &self.edges {
            write!(f, "{edge}")?;
        }
        for variable in &self.variables {
            write!(f, "{variable}")?;
        }
        if let Some(target) = &self.default_target {
            writeln!(f, "default {target}")?;
        }
        Ok(())
    }
}

//! Build edge declarations.

use crate::paths::IntoPaths;
use crate::render::write_kv;
use indexmap::IndexMap;
use itertools::Itertools;
use std::fmt::{self, Display, Formatter};

/// The rule an edge is bound to until [`Edge::using`] rebinds it.
pub const PHONY_RULE: &str = "phony";

/// One `build` statement binding outputs to a rule and its inputs.
///
/// Edges are created through [`crate::NinjaFile::edge`]. The bound rule
/// defaults to Ninja's built-in `phony` no-op. Input accumulators
/// ([`Edge::from`], [`Edge::need`], [`Edge::after`]) are cumulative: the
/// first call initialises the list and later calls append to it. An
/// accumulator that was never called contributes no clause at all, which is
/// distinct from one called with an empty list.
///
/// # Examples
///
/// ```rust
/// use ninjafile::Edge;
///
/// let mut edge = Edge::new("out.o");
/// edge.using("cc").from("in.c").need("cc.rsp").after("gen_headers");
/// assert_eq!(
///     edge.to_string(),
///     "build out.o: cc in.c | cc.rsp || gen_headers\n",
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Edge {
    targets: Vec<String>,
    rule: String,
    sources: Option<Vec<String>>,
    dependencies: Option<Vec<String>>,
    order_deps: Option<Vec<String>>,
    variables: IndexMap<String, String>,
    pool: Option<String>,
}

/// Append `items` to an accumulator, initialising it on first use.
fn accumulate(list: &mut Option<Vec<String>>, items: Vec<String>) {
    list.get_or_insert_with(Vec::new).extend(items);
}

impl Edge {
    /// Create an edge producing `targets`, bound to the `phony` rule.
    #[must_use]
    pub fn new(targets: impl IntoPaths) -> Self {
        Self {
            targets: targets.into_paths(),
            rule: PHONY_RULE.to_owned(),
            sources: None,
            dependencies: None,
            order_deps: None,
            variables: IndexMap::new(),
            pool: None,
        }
    }

    /// The output targets, in declaration order.
    #[must_use]
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Bind the edge to a named rule.
    ///
    /// The name is taken as-is; no check is made that a rule of that name
    /// exists in the owning file.
    pub fn using(&mut self, rule: impl Into<String>) -> &mut Self {
        self.rule = rule.into();
        self
    }

    /// Append explicit input sources.
    pub fn from(&mut self, sources: impl IntoPaths) -> &mut Self {
        accumulate(&mut self.sources, sources.into_paths());
        self
    }

    /// Append implicit dependencies (rendered after `|`): changes trigger a
    /// rebuild, but the paths are not passed to the command as inputs.
    pub fn need(&mut self, dependencies: impl IntoPaths) -> &mut Self {
        accumulate(&mut self.dependencies, dependencies.into_paths());
        self
    }

    /// Append order-only dependencies (rendered after `||`): they sequence
    /// the build without triggering rebuilds on change.
    pub fn after(&mut self, order_deps: impl IntoPaths) -> &mut Self {
        accumulate(&mut self.order_deps, order_deps.into_paths());
        self
    }

    /// Set an edge-local variable override. The last write for a given name
    /// wins; first-write order decides render order.
    pub fn assign(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Run this edge's command inside the named execution pool.
    pub fn pool(&mut self, name: impl Into<String>) -> &mut Self {
        self.pool = Some(name.into());
        self
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "build {}: {}", self.targets.iter().join(" "), self.rule)?;
        if let Some(sources) = &self.sources {
            write!(f, " {}", sources.iter().join(" "))?;
        }
        if let Some(dependencies) = &self.dependencies {
            write!(f, " | {}", dependencies.iter().join(" "))?;
        }
        if let Some(order_deps) = &self.order_deps {
            write!(f, " || {}", order_deps.iter().join(" "))?;
        }
        writeln!(f)?;
        for (name, value) in &self.variables {
            writeln!(f, "  {name} = {value}")?;
        }
        write_kv!(f, "pool", &self.pool);
        Ok(())
    }
}

//! Conversion trait for path-list arguments.
//!
//! Builder methods that take targets, sources, or dependencies accept either
//! a single token or a sequence of tokens. [`IntoPaths`] normalises both
//! shapes to a `Vec<String>` so call sites stay terse.

/// Types usable as a path-list argument to the builder API.
///
/// # Examples
///
/// ```rust
/// use ninjafile::IntoPaths;
///
/// assert_eq!("a.c".into_paths(), vec!["a.c".to_owned()]);
/// assert_eq!(["a.c", "b.c"].into_paths(), vec!["a.c", "b.c"]);
/// ```
pub trait IntoPaths {
    /// Normalise the argument into an ordered list of path tokens.
    fn into_paths(self) -> Vec<String>;
}

impl IntoPaths for &str {
    fn into_paths(self) -> Vec<String> {
        vec![self.to_owned()]
    }
}

impl IntoPaths for String {
    fn into_paths(self) -> Vec<String> {
        vec![self]
    }
}

impl<S: Into<String>> IntoPaths for Vec<S> {
    fn into_paths(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<S: Into<String>, const N: usize> IntoPaths for [S; N] {
    fn into_paths(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl IntoPaths for &[&str] {
    fn into_paths(self) -> Vec<String> {
        self.iter().map(|s| (*s).to_owned()).collect()
    }
}

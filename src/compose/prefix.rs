use std::fmt;

use crate::compose::composer::compose;

/// The accumulated identifier handed from a node to its descendants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Prefix(String);

impl Prefix {
    /// No ancestor identifiers yet.
    pub fn empty() -> Self {
        Prefix(String::new())
    }

    /// Start a new namespace. The identifier is taken verbatim.
    pub fn root(identifier: impl Into<String>) -> Self {
        Prefix(identifier.into())
    }

    /// Extend this prefix with a node's fragment.
    pub fn compose(&self, fragment: &str) -> Prefix {
        Prefix(compose(&self.0, fragment))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_chains_from_empty() {
        let p = Prefix::empty().compose("a").compose("b").compose("c");
        assert_eq!(p.as_str(), "a.b.c");
    }

    #[test]
    fn root_is_verbatim() {
        let p = Prefix::root("login.login");
        assert_eq!(p.as_str(), "login.login");
        assert_eq!(p.compose("login").as_str(), "login.login");
    }
}

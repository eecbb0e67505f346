//! Prefix-based name resolution.

use ahash::AHashMap;

use ontogoal_model::{vocab, Iri, NameResolver, ResolveError};

/// Expands prefixed names (`dfl:Cup`) to fully-qualified IRIs.
///
/// Absolute IRIs (anything containing `://`) pass through unchanged. Bare
/// names without a prefix resolve against the default namespace when one is
/// set, and fail otherwise.
#[derive(Debug, Clone)]
pub struct PrefixMap {
    prefixes: AHashMap<String, String>,
    default_ns: Option<String>,
}

impl PrefixMap {
    /// An empty map with no registered prefixes.
    pub fn empty() -> Self {
        Self {
            prefixes: AHashMap::new(),
            default_ns: None,
        }
    }

    /// The standard prefixes the workspace vocabulary uses, with `dfl` as
    /// the default namespace for bare names.
    pub fn standard() -> Self {
        let mut map = Self::empty();
        map.register("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#");
        map.register("rdfs", "http://www.w3.org/2000/01/rdf-schema#");
        map.register("owl", "http://www.w3.org/2002/07/owl#");
        map.register("dfl", vocab::NS_DFL);
        map.default_ns = Some(vocab::NS_DFL.to_string());
        map
    }

    pub fn register(&mut self, prefix: impl Into<String>, expansion: impl Into<String>) {
        self.prefixes.insert(prefix.into(), expansion.into());
    }

    pub fn set_default_namespace(&mut self, ns: impl Into<String>) {
        self.default_ns = Some(ns.into());
    }
}

impl Default for PrefixMap {
    fn default() -> Self {
        Self::standard()
    }
}

impl NameResolver for PrefixMap {
    fn resolve(&self, raw: &str) -> Result<Iri, ResolveError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ResolveError::Empty);
        }
        if raw.contains("://") {
            return Ok(Iri::from(raw));
        }
        match raw.split_once(':') {
            Some((prefix, local)) => {
                let Some(expansion) = self.prefixes.get(prefix) else {
                    return Err(ResolveError::UnknownPrefix(raw.to_string()));
                };
                Ok(Iri::new(format!("{expansion}{local}")))
            }
            None => {
                let Some(ns) = &self.default_ns else {
                    return Err(ResolveError::UnknownPrefix(raw.to_string()));
                };
                Ok(Iri::new(format!("{ns}{raw}")))
            }
        }
    }
}

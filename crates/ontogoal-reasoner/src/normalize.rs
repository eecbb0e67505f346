//! Term normalization: raw goal arguments to bound/unbound terms.

use ontogoal_model::{GoalArg, GoalError, Iri, NameResolver, Term, Variable};

/// Strips quoting artifacts from an external name: repeated leading `'` or
/// `"` characters, each with its matching trailing quote when present.
pub fn strip_quotes(raw: &str) -> &str {
    let mut s = raw;
    loop {
        let Some(first) = s.chars().next() else {
            return s;
        };
        if first != '\'' && first != '"' {
            return s;
        }
        s = &s[1..];
        if let Some(rest) = s.strip_suffix(first) {
            s = rest;
        }
    }
}

/// Resolve an external name to a fully-qualified identifier.
pub fn resolve_name<R: NameResolver>(raw: &str, resolver: &R) -> Result<Iri, GoalError> {
    resolver
        .resolve(strip_quotes(raw))
        .map_err(|source| GoalError::UnresolvableName {
            name: raw.to_string(),
            source,
        })
}

/// Convert a raw goal argument into a [`Term`].
///
/// Variables pass through unchanged; names are stripped of quoting and
/// expanded through the resolver. The returned tag never changes afterwards.
pub fn normalize<R: NameResolver>(arg: &GoalArg, resolver: &R) -> Result<Term, GoalError> {
    match arg {
        GoalArg::Variable(name) => Ok(Term::Unbound(Variable::new(name.clone()))),
        GoalArg::Name(raw) => resolve_name(raw, resolver).map(Term::Bound),
    }
}

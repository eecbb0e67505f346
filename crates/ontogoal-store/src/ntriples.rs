//! N-Triples loading for fact files.
//!
//! Fact files carry asserted facts and `rdf:type` membership assertions. The
//! evaluator only walks IRI-valued facts, so blank nodes and literals are
//! skipped rather than rejected.

use sophia::api::prelude::*;

use crate::MemoryGraph;

#[derive(Debug, thiserror::Error)]
pub enum NtriplesError {
    #[error("failed to parse N-Triples: {0}")]
    Parse(String),
}

#[derive(Debug, thiserror::Error)]
#[error("{message}")]
struct SinkError {
    message: String,
}

/// Strips the `<...>` wrapping from an IRI term in display form. Returns
/// `None` for blank nodes and literals.
fn display_iri(term: &str) -> Option<&str> {
    let term = term.trim();
    term.strip_prefix('<').and_then(|t| t.strip_suffix('>'))
}

/// Parse `text` as N-Triples and insert every IRI-to-IRI triple into `graph`.
///
/// Returns the number of triples inserted (deduplicated against the graph's
/// existing contents).
pub fn load_ntriples(graph: &mut MemoryGraph, text: &str) -> Result<usize, NtriplesError> {
    let reader = std::io::BufReader::new(std::io::Cursor::new(text.as_bytes()));
    let mut inserted = 0usize;
    let mut parser = sophia::turtle::parser::nt::parse_bufread(reader);
    parser
        .try_for_each_triple(|t| -> Result<(), SinkError> {
            let subject = t.s().to_string();
            let predicate = t.p().to_string();
            let object = t.o().to_string();
            let (Some(s), Some(p), Some(o)) = (
                display_iri(&subject),
                display_iri(&predicate),
                display_iri(&object),
            ) else {
                tracing::debug!(triple = %format!("{subject} {predicate} {object}"),
                    "skipping non-IRI triple");
                return Ok(());
            };
            if graph.insert(s, p, o) {
                inserted += 1;
            }
            Ok(())
        })
        .map_err(|e| NtriplesError::Parse(e.to_string()))?;
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontogoal_model::vocab;

    const SAMPLE_NTRIPLES: &str = r#"
<http://example.org/Cup1> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://example.org/DrinkingCup> .
<http://example.org/Apple1> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://example.org/Apple> .
<http://example.org/Cup1> <http://www.w3.org/2000/01/rdf-schema#label> "a cup" .
"#;

    #[test]
    fn loads_iri_triples_and_skips_literals() {
        let mut graph = MemoryGraph::new();
        let inserted = load_ntriples(&mut graph, SAMPLE_NTRIPLES).expect("load");
        assert_eq!(inserted, 2);
        assert!(graph.has_triple(
            "http://example.org/Cup1",
            vocab::RDF_TYPE,
            "http://example.org/DrinkingCup"
        ));
        assert!(graph.has_triple(
            "http://example.org/Apple1",
            vocab::RDF_TYPE,
            "http://example.org/Apple"
        ));
    }

    #[test]
    fn reports_malformed_input() {
        let mut graph = MemoryGraph::new();
        let err = load_ntriples(&mut graph, "this is not ntriples").expect_err("should fail");
        assert!(matches!(err, NtriplesError::Parse(_)));
    }
}

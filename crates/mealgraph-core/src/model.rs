//! Triple and term data model

use serde::{Deserialize, Serialize};

/// Object position of a triple: a reference to another resource or a
/// plain literal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    Iri(String),
    Literal(String),
}

impl Term {
    /// Lexical value of the term, regardless of kind.
    pub fn value(&self) -> &str {
        match self {
            Term::Iri(iri) => iri,
            Term::Literal(value) => value,
        }
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Term::Iri(_) => None,
            Term::Literal(value) => Some(value),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{}>", iri),
            Term::Literal(value) => write!(f, "\"{}\"", value),
        }
    }
}

/// A single RDF statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: Term,
}

impl Triple {
    pub fn new<S: Into<String>, P: Into<String>>(subject: S, predicate: P, object: Term) -> Self {
        Triple {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }

    /// Statement whose object is a resource reference.
    pub fn resource<S, P, O>(subject: S, predicate: P, object: O) -> Self
    where
        S: Into<String>,
        P: Into<String>,
        O: Into<String>,
    {
        Triple::new(subject, predicate, Term::Iri(object.into()))
    }

    /// Statement whose object is a literal value.
    pub fn literal<S, P, O>(subject: S, predicate: P, object: O) -> Self
    where
        S: Into<String>,
        P: Into<String>,
        O: Into<String>,
    {
        Triple::new(subject, predicate, Term::Literal(object.into()))
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}> <{}> {}", self.subject, self.predicate, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_accessors() {
        let iri = Term::Iri("http://example.org/meal/1".to_string());
        let literal = Term::Literal("Beef Stew".to_string());

        assert_eq!(iri.as_iri(), Some("http://example.org/meal/1"));
        assert_eq!(iri.as_literal(), None);
        assert!(!iri.is_literal());

        assert_eq!(literal.as_literal(), Some("Beef Stew"));
        assert_eq!(literal.as_iri(), None);
        assert!(literal.is_literal());

        assert_eq!(iri.value(), "http://example.org/meal/1");
        assert_eq!(literal.value(), "Beef Stew");
    }

    #[test]
    fn test_triple_equality() {
        let a = Triple::literal("s", "p", "o");
        let b = Triple::literal("s", "p", "o");
        let c = Triple::resource("s", "p", "o");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_triple_display() {
        let triple = Triple::literal("http://example.org/meal/1", "http://example.org/recipe/hasName", "Beef Stew");
        assert_eq!(
            format!("{}", triple),
            "<http://example.org/meal/1> <http://example.org/recipe/hasName> \"Beef Stew\""
        );
    }
}

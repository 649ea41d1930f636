//! Graph file serialization and loading
//!
//! Writes the accumulated triple set to a textual RDF file with the five
//! vocabulary prefixes bound, and parses such a file back into a
//! [`GraphStore`]. Writing goes through a temporary file in the
//! destination directory that is persisted only after a fully successful
//! serialization, so an I/O failure never leaves a half-written graph.

use crate::store::GraphStore;
use mealgraph_core::model::{Term, Triple};
use mealgraph_core::vocab;
use oxrdf::{GraphName, Literal, NamedNode, Quad, Subject, Term as RdfTerm};
use oxrdfio::{RdfFormat, RdfParser, RdfSerializer};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use thiserror::Error;

/// Textual RDF serializations the store can be written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Turtle,
    NTriples,
}

impl GraphFormat {
    fn as_rdf_format(self) -> RdfFormat {
        match self {
            GraphFormat::Turtle => RdfFormat::Turtle,
            GraphFormat::NTriples => RdfFormat::NTriples,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            GraphFormat::Turtle => "ttl",
            GraphFormat::NTriples => "nt",
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("invalid IRI in triple: {0}")]
    InvalidIri(#[from] oxrdf::IriParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("graph file parse error: {0}")]
    Parse(#[from] oxrdfio::RdfParseError),

    #[error("unsupported term in graph file: {0}")]
    UnsupportedTerm(String),
}

/// Namespace prefixes bound in every serialized file.
const PREFIXES: [(&str, &str); 5] = [
    ("recipe", vocab::ns::RECIPE),
    ("meal", vocab::ns::MEAL),
    ("ingredient", vocab::ns::INGREDIENT),
    ("category", vocab::ns::CATEGORY),
    ("cuisine", vocab::ns::CUISINE),
];

fn serializer(format: GraphFormat) -> Result<RdfSerializer, StoreError> {
    let mut serializer = RdfSerializer::from_format(format.as_rdf_format());
    for (prefix, iri) in PREFIXES {
        serializer = serializer.with_prefix(prefix, iri)?;
    }
    Ok(serializer)
}

fn to_quad(triple: &Triple) -> Result<Quad, StoreError> {
    let subject = NamedNode::new(triple.subject.clone())?;
    let predicate = NamedNode::new(triple.predicate.clone())?;
    let object: RdfTerm = match &triple.object {
        Term::Iri(iri) => NamedNode::new(iri.clone())?.into(),
        Term::Literal(value) => Literal::new_simple_literal(value.clone()).into(),
    };
    Ok(Quad::new(subject, predicate, object, GraphName::DefaultGraph))
}

fn from_quad(quad: Quad) -> Result<Triple, StoreError> {
    let subject = match quad.subject {
        Subject::NamedNode(node) => node.into_string(),
        other => return Err(StoreError::UnsupportedTerm(other.to_string())),
    };
    let object = match quad.object {
        RdfTerm::NamedNode(node) => Term::Iri(node.into_string()),
        RdfTerm::Literal(literal) => Term::Literal(literal.value().to_string()),
        other => return Err(StoreError::UnsupportedTerm(other.to_string())),
    };
    Ok(Triple {
        subject,
        predicate: quad.predicate.into_string(),
        object,
    })
}

/// Serialize the entire store to `path`.
pub fn save_to_file(store: &GraphStore, path: &Path, format: GraphFormat) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let temp = tempfile::NamedTempFile::new_in(dir)?;

    let mut writer = serializer(format)?.for_writer(BufWriter::new(temp));
    for triple in store.iter() {
        let quad = to_quad(triple)?;
        writer.serialize_quad(&quad)?;
    }
    let buffered = writer.finish()?;
    let temp = buffered
        .into_inner()
        .map_err(|error| StoreError::Io(error.into_error()))?;
    temp.persist(path).map_err(|error| StoreError::Io(error.error))?;
    Ok(())
}

/// Parse a serialized graph file back into a store.
///
/// The pipeline never emits blank nodes, so encountering one (or any
/// other non-IRI subject) is reported as [`StoreError::UnsupportedTerm`].
pub fn load_from_file(path: &Path, format: GraphFormat) -> Result<GraphStore, StoreError> {
    let reader = BufReader::new(File::open(path)?);
    let mut store = GraphStore::new();
    for quad in RdfParser::from_format(format.as_rdf_format()).for_reader(reader) {
        store.insert(from_quad(quad?)?);
    }
    Ok(store)
}

//! In-memory graph storage with set semantics and indexing

use mealgraph_core::model::{Term, Triple};
use smallvec::SmallVec;
use std::collections::{HashMap, HashSet};

type IndexEntries = SmallVec<[usize; 8]>;

/// In-memory triple store.
///
/// Triples form a set: inserting a statement that is already present is a
/// no-op, which is what makes repeated mapping of the same record
/// idempotent. Insertion order is preserved for iteration, and
/// subject/predicate/object indexes back the pattern lookups. This is a
/// write-once accumulate-then-dump store; there are no update or delete
/// operations.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// All triples in insertion order.
    triples: Vec<Triple>,
    /// Set view of `triples` for duplicate detection.
    seen: HashSet<Triple>,
    /// Subject index: subject -> triple indices.
    subject_index: HashMap<String, IndexEntries>,
    /// Predicate index: predicate -> triple indices.
    predicate_index: HashMap<String, IndexEntries>,
    /// Object index, keyed by the term's lexical value.
    object_index: HashMap<String, IndexEntries>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple. Returns false, leaving the store unchanged, when
    /// the triple is already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.seen.contains(&triple) {
            return false;
        }
        let index = self.triples.len();
        self.subject_index
            .entry(triple.subject.clone())
            .or_default()
            .push(index);
        self.predicate_index
            .entry(triple.predicate.clone())
            .or_default()
            .push(index);
        self.object_index
            .entry(triple.object.value().to_string())
            .or_default()
            .push(index);
        self.seen.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    /// Insert every triple, returning how many were newly added.
    pub fn insert_all<I: IntoIterator<Item = Triple>>(&mut self, triples: I) -> usize {
        triples
            .into_iter()
            .map(|triple| self.insert(triple))
            .filter(|added| *added)
            .count()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.seen.contains(triple)
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over all triples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Find triples matching a pattern.
    ///
    /// Candidates come from the most selective available index (subject,
    /// then predicate, then object), then the remaining constraints filter
    /// the candidate list. Results keep insertion order.
    pub fn find_triples(
        &self,
        subject: Option<&str>,
        predicate: Option<&str>,
        object: Option<&Term>,
    ) -> Vec<&Triple> {
        let candidates: IndexEntries = match (subject, predicate, object) {
            (Some(s), _, _) => self.subject_index.get(s).cloned().unwrap_or_default(),
            (None, Some(p), _) => self.predicate_index.get(p).cloned().unwrap_or_default(),
            (None, None, Some(o)) => self
                .object_index
                .get(o.value())
                .cloned()
                .unwrap_or_default(),
            (None, None, None) => (0..self.triples.len()).collect(),
        };

        candidates
            .iter()
            .filter_map(|&index| self.triples.get(index))
            .filter(|triple| {
                subject.map_or(true, |s| triple.subject == s)
                    && predicate.map_or(true, |p| triple.predicate == p)
                    && object.map_or(true, |o| &triple.object == o)
            })
            .collect()
    }
}

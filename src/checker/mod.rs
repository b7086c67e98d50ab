// src/checker/mod.rs
// =============================================================================
// This module contains the grading logic: running selectors against a page.
//
// Submodules:
// - html: evaluates selectors against a parsed Document
//
// This file also defines ResultMap, the outcome of one grading run.
// =============================================================================

mod html;

pub use html::evaluate;

use serde::Serialize;
use std::collections::BTreeMap;

/// Presence of each selector in the graded page.
///
/// Keys iterate (and serialize) in ascending order, which is the order the
/// sorted check list is evaluated in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultMap(BTreeMap<String, bool>);

impl ResultMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, selector: String, present: bool) {
        self.0.insert(selector, present);
    }

    pub fn get(&self, selector: &str) -> Option<bool> {
        self.0.get(selector).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Selectors in report order
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(selector, present)| (selector.as_str(), *present))
    }
}

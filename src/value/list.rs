use std::{ops::Index, slice};

use crate::{Config, ConversionError, Kind, Value};

/// A list whose elements share one inferred kind.
///
/// The element kind is unset until the first element arrives and becomes
/// unset again only when the list is emptied. Elements of another kind are
/// adopted: converted to the list's kind or, with retroactive adoption, the
/// whole list is converted to theirs.
#[derive(Clone, Debug, Default)]
pub struct List {
    elements: Vec<Value>,
    kind: Option<Kind>,
    minimal: bool,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list whose elements are already known to share `kind`.
    pub(crate) fn from_parts(kind: Option<Kind>, elements: Vec<Value>) -> Self {
        debug_assert!(elements.iter().all(|e| Some(e.kind()) == kind));
        Self {
            kind: if elements.is_empty() { None } else { kind },
            elements,
            minimal: false,
        }
    }

    pub fn with_minimal(mut self, minimal: bool) -> Self {
        self.minimal = minimal;
        self
    }

    #[inline]
    pub fn element_kind(&self) -> Option<Kind> {
        self.kind
    }

    /// Adds `value`, adopting it into the list's element kind.
    ///
    /// Returns `Ok(false)` when the value was dropped: the legacy grammar
    /// silently ignores elements of a different kind.
    pub fn add(&mut self, value: Value, config: &Config) -> Result<bool, ConversionError> {
        let from = value.kind();
        if from == Kind::End {
            return Err(ConversionError::new(from, self.kind.unwrap_or(Kind::End)));
        }
        let Some(kind) = self.kind else {
            self.kind = Some(from);
            self.elements.push(value);
            return Ok(true);
        };
        if from == kind {
            self.elements.push(value);
            return Ok(true);
        }
        if config.version.is_wild_west() {
            tracing::debug!("dropping {} element from a list of {}", from, kind);
            return Ok(false);
        }
        match value.to_kind(kind, config) {
            Ok(converted) => {
                self.elements.push(converted);
                Ok(true)
            }
            Err(err) if config.retroactive_adoption => {
                let adopted = self
                    .elements
                    .iter()
                    .map(|element| element.to_kind(from, config))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|_| err)?;
                tracing::debug!("list adopted {} from a new element, was {}", from, kind);
                self.elements = adopted;
                self.elements.push(value);
                self.kind = Some(from);
                Ok(true)
            }
            Err(err) => Err(err),
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<Value> {
        if index >= self.elements.len() {
            return None;
        }
        let removed = self.elements.remove(index);
        if self.elements.is_empty() {
            self.kind = None;
        }
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.elements.clear();
        self.kind = None;
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.elements.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.elements
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Value> {
        self.elements
    }

    #[inline]
    pub fn is_minimal(&self) -> bool {
        self.minimal
    }

    #[inline]
    pub fn set_minimal(&mut self, minimal: bool) {
        self.minimal = minimal;
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl Index<usize> for List {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.elements[index]
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

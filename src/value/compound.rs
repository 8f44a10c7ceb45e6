use std::{
    borrow::Borrow,
    collections::{BTreeMap, btree_map},
    ops::Index,
};

use crate::Value;

/// A key-sorted map from string keys to values.
#[derive(Clone, Debug, Default)]
pub struct Compound {
    entries: BTreeMap<String, Value>,
    minimal: bool,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_minimal(mut self, minimal: bool) -> Self {
        self.minimal = minimal;
        self
    }

    /// Inserts an entry, returning the value it replaced.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&Value>
    where
        String: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.get(key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut Value>
    where
        String: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.get_mut(key)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<Value>
    where
        String: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.remove(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        String: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, String, Value> {
        self.entries.iter_mut()
    }

    #[inline]
    pub fn keys(&self) -> btree_map::Keys<'_, String, Value> {
        self.entries.keys()
    }

    #[inline]
    pub fn values(&self) -> btree_map::Values<'_, String, Value> {
        self.entries.values()
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

impl PartialEq for Compound {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<Q> Index<&Q> for Compound
where
    String: Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Output = Value;

    fn index(&self, key: &Q) -> &Value {
        &self.entries[key]
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Compound {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            minimal: false,
        }
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Compound {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Compound {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

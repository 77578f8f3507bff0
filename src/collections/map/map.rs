use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FusedIterator;
use std::mem;
use std::ops::Index;

use crate::collections::entry::{Entry, write_entries};
use crate::collections::linked::chain::{self, Chain};
use crate::collections::traits::Container;
use crate::error::{KindMismatch, NotFound, RemoveError};
use crate::util::result::ResultExtension;
use crate::value::{Tofu, TofuKind};

/// A map from text keys to values of one kind, kept in a linked chain in insertion order.
///
/// Every lookup is a linear scan, which makes this the simplest keyed container rather than the
/// fastest. See [`HashTable`](crate::collections::hash::HashTable) for bucketed lookups.
pub struct Map {
    pub(crate) kind: TofuKind,
    pub(crate) chain: Chain<Entry>,
}

impl Map {
    pub const fn new(kind: TofuKind) -> Map {
        Map {
            kind,
            chain: Chain::new(),
        }
    }

    pub const fn kind(&self) -> TofuKind {
        self.kind
    }

    pub const fn len(&self) -> usize {
        self.chain.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Associates `value` with `key`, returning the value it replaced, if any. A new key is added
    /// at the end; an existing key keeps its position.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: Tofu,
    ) -> Result<Option<Tofu>, KindMismatch> {
        self.kind.check(&value)?;
        let key = key.into();

        if let Some(entry) = self.chain.iter_mut().find(|entry| entry.key == key) {
            return Ok(Some(mem::replace(&mut entry.value, value)));
        }

        self.chain.push_back(Entry { key, value });
        Ok(None)
    }

    pub fn get(&self, key: &str) -> Option<&Tofu> {
        self.chain.iter().find(|entry| entry.key == key).map(|entry| &entry.value)
    }

    pub fn try_get(&self, key: &str) -> Result<&Tofu, NotFound> {
        self.get(key).ok_or(NotFound)
    }

    /// Overwrites the value of an existing key, returning the old value.
    pub fn replace(&mut self, key: &str, value: Tofu) -> Result<Tofu, RemoveError> {
        self.kind.check(&value)?;
        let entry = self.chain.iter_mut().find(|entry| entry.key == key).ok_or(NotFound)?;
        Ok(mem::replace(&mut entry.value, value))
    }

    pub fn remove(&mut self, key: &str) -> Result<Tofu, NotFound> {
        let entry = self.chain.remove_first(|entry| entry.key == key).ok_or(NotFound)?;
        Ok(entry.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn clear(&mut self) {
        self.chain.clear();
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter(self.chain.iter())
    }

    pub fn keys(&self) -> Keys<'_> {
        Keys(self.chain.iter())
    }

    pub fn values(&self) -> Values<'_> {
        Values(self.chain.iter())
    }
}

impl Container for Map {
    type Iter<'a> = Values<'a>;

    fn kind(&self) -> TofuKind {
        self.kind
    }

    fn len(&self) -> usize {
        self.chain.len()
    }

    fn iter(&self) -> Values<'_> {
        self.values()
    }
}

impl Index<&str> for Map {
    type Output = Tofu;

    fn index(&self, key: &str) -> &Self::Output {
        self.try_get(key).throw()
    }
}

impl Clone for Map {
    fn clone(&self) -> Self {
        Map {
            kind: self.kind,
            chain: self.chain.clone(),
        }
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.iter().eq(other.iter())
    }
}

impl Eq for Map {}

impl Debug for Map {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("kind", &self.kind)
            .field("entries", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl Display for Map {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_entries(f, self.iter())
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a str, &'a Tofu);

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone)]
pub struct Iter<'a>(pub(crate) chain::Iter<'a, Entry>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Tofu);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Entry::pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[derive(Clone)]
pub struct Keys<'a>(pub(crate) chain::Iter<'a, Entry>);

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|entry| entry.key.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Keys<'_> {}

impl FusedIterator for Keys<'_> {}

#[derive(Clone)]
pub struct Values<'a>(pub(crate) chain::Iter<'a, Entry>);

impl<'a> Iterator for Values<'a> {
    type Item = &'a Tofu;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|entry| &entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Values<'_> {}

impl FusedIterator for Values<'_> {}

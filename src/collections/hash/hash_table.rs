use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FusedIterator;
use std::mem;
use std::num::NonZeroUsize;
use std::ops::Index;
use std::slice;

use tracing::{trace, warn};

use crate::collections::entry::{Entry, write_entries};
use crate::collections::linked::chain::{self, Chain};
use crate::collections::traits::Container;
use crate::error::{AllocationFailure, KindMismatch, NotFound, RemoveError};
use crate::util::result::ResultExtension;
use crate::value::{Tofu, TofuKind};

/// The number of buckets used by [`HashTable::new`].
pub const DEFAULT_BUCKETS: usize = 64;

const HASH_BASE: u64 = 31;

/// Hashes `key` as a base 31 polynomial over its bytes, wrapping on overflow.
///
/// ```
/// # use tofu::collections::hash::polynomial_hash;
/// assert_eq!(polynomial_hash(""), 0);
/// assert_eq!(polynomial_hash("ab"), 97 * 31 + 98);
/// ```
pub fn polynomial_hash(key: &str) -> u64 {
    key.bytes().fold(0, |hash, byte| hash.wrapping_mul(HASH_BASE).wrapping_add(u64::from(byte)))
}

/// A map from text keys to values of one kind, spread over a fixed number of buckets.
///
/// Each key lives in bucket `polynomial_hash(key) % bucket_count`. Keys that land in the same
/// bucket are chained, newest first. The number of buckets never changes, so long chains are the
/// cost of choosing too few.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the HashTable.
/// - `b`: The number of buckets.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert/get/replace/remove` | `O(1)`* |
/// | `iter` | `O(n + b)` |
///
/// \* Plus the length of the chain in the key's bucket, which is `n / b` on average.
pub struct HashTable {
    pub(crate) kind: TofuKind,
    pub(crate) buckets: Box<[Chain<Entry>]>,
    pub(crate) len: usize,
}

impl HashTable {
    /// Creates an empty HashTable with [`DEFAULT_BUCKETS`] buckets.
    pub fn new(kind: TofuKind) -> HashTable {
        HashTable {
            kind,
            buckets: (0..DEFAULT_BUCKETS).map(|_| Chain::new()).collect(),
            len: 0,
        }
    }

    /// Creates an empty HashTable with exactly `buckets` buckets.
    ///
    /// # Errors
    /// Returns [`AllocationFailure`] if the bucket array can't be allocated.
    pub fn with_buckets(
        kind: TofuKind,
        buckets: NonZeroUsize,
    ) -> Result<HashTable, AllocationFailure> {
        let count = buckets.get();
        let mut array = Vec::new();
        array.try_reserve_exact(count).map_err(|error| {
            warn!(buckets = count, %error, "hash table allocation failed");
            AllocationFailure { requested: count }
        })?;
        array.extend((0..count).map(|_| Chain::new()));

        Ok(HashTable {
            kind,
            buckets: array.into_boxed_slice(),
            len: 0,
        })
    }

    pub const fn kind(&self) -> TofuKind {
        self.kind
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Associates `value` with `key`, returning the value it replaced, if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: Tofu,
    ) -> Result<Option<Tofu>, KindMismatch> {
        self.kind.check(&value)?;
        let key = key.into();
        let bucket = self.bucket_index(&key);
        let chain = &mut self.buckets[bucket];

        if let Some(entry) = chain.iter_mut().find(|entry| entry.key == key) {
            return Ok(Some(mem::replace(&mut entry.value, value)));
        }

        if !chain.is_empty() {
            trace!(%key, bucket, chained = chain.len(), "hash bucket collision");
        }
        chain.push_front(Entry { key, value });
        self.len += 1;
        Ok(None)
    }

    pub fn get(&self, key: &str) -> Option<&Tofu> {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    pub fn try_get(&self, key: &str) -> Result<&Tofu, NotFound> {
        self.get(key).ok_or(NotFound)
    }

    /// Overwrites the value of an existing key, returning the old value. Unlike
    /// [`insert`](HashTable::insert), an absent key is an error.
    pub fn replace(&mut self, key: &str, value: Tofu) -> Result<Tofu, RemoveError> {
        self.kind.check(&value)?;
        let bucket = self.bucket_index(key);
        let entry = self.buckets[bucket]
            .iter_mut()
            .find(|entry| entry.key == key)
            .ok_or(NotFound)?;
        Ok(mem::replace(&mut entry.value, value))
    }

    pub fn remove(&mut self, key: &str) -> Result<Tofu, NotFound> {
        let bucket = self.bucket_index(key);
        let entry = self.buckets[bucket].remove_first(|entry| entry.key == key).ok_or(NotFound)?;
        self.len -= 1;
        Ok(entry.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn clear(&mut self) {
        for chain in self.buckets.iter_mut() {
            chain.clear();
        }
        self.len = 0;
    }

    /// Iterates over every entry, bucket by bucket, newest first within a bucket.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.entries())
    }

    pub fn keys(&self) -> Keys<'_> {
        Keys(self.entries())
    }

    pub fn values(&self) -> Values<'_> {
        Values(self.entries())
    }

    pub(crate) fn bucket_index(&self, key: &str) -> usize {
        // The bucket count fits in a u64, so the remainder fits back in a usize.
        (polynomial_hash(key) % self.buckets.len() as u64) as usize
    }

    pub(crate) fn entries(&self) -> Entries<'_> {
        Entries {
            buckets: self.buckets.iter(),
            chain: None,
            len: self.len,
        }
    }
}

impl Container for HashTable {
    type Iter<'a> = Values<'a>;

    fn kind(&self) -> TofuKind {
        self.kind
    }

    fn len(&self) -> usize {
        self.len
    }

    /// Iterates over the values.
    fn iter(&self) -> Values<'_> {
        self.values()
    }
}

impl Index<&str> for HashTable {
    type Output = Tofu;

    fn index(&self, key: &str) -> &Self::Output {
        self.try_get(key).throw()
    }
}

impl Clone for HashTable {
    fn clone(&self) -> Self {
        HashTable {
            kind: self.kind,
            buckets: self.buckets.clone(),
            len: self.len,
        }
    }
}

impl PartialEq for HashTable {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.len == other.len
            && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl Eq for HashTable {}

impl Debug for HashTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("kind", &self.kind)
            .field(
                "buckets",
                &self.buckets
                    .iter()
                    .map(|chain| chain.iter().map(Entry::pair).collect::<Vec<_>>())
                    .collect::<Vec<_>>(),
            )
            .field("len", &self.len)
            .finish()
    }
}

impl Display for HashTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        write_entries(f, self.iter())
    }
}

impl<'a> IntoIterator for &'a HashTable {
    type Item = (&'a str, &'a Tofu);

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Walks the buckets in order and each bucket's chain from its head.
#[derive(Clone)]
pub(crate) struct Entries<'a> {
    pub(crate) buckets: slice::Iter<'a, Chain<Entry>>,
    pub(crate) chain: Option<chain::Iter<'a, Entry>>,
    pub(crate) len: usize,
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.as_mut().and_then(|chain| chain.next()) {
                self.len -= 1;
                return Some(entry);
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

#[derive(Clone)]
pub struct Iter<'a>(pub(crate) Entries<'a>);

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
pub struct Keys<'a>(pub(crate) Entries<'a>);

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
pub struct Values<'a>(pub(crate) Entries<'a>);

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

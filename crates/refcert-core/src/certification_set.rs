//! # Certification Set
//!
//! A fixed-capacity set of [`Certification`] over the full
//! `Level × Version` domain, backed by a flat bit-vector sized at compile
//! time. Used to accumulate the certifications a test awards and to read
//! the certifications a referee holds.
//!
//! ## Index Scheme
//!
//! ```text
//! index(level, version) = rank(level) * Version::COUNT + rank(version)
//! level   = index / Version::COUNT
//! version = index % Version::COUNT
//! ```
//!
//! Decoding divides by the **version** domain size because that is the
//! multiplier used to encode. `Level::COUNT != Version::COUNT`, so dividing
//! by the level count would silently reconstruct the wrong pair. The
//! bijection is checked exhaustively in tests.
//!
//! ## Enumeration Order
//!
//! [`CertificationSet::iter`] yields in **descending** index order: the
//! highest level first and, within a level, the newest rulebook first.
//! [`CertificationSet::first`] is therefore "the referee's top
//! certification". This is the reverse of the chronological `Ord` on
//! [`Certification`].

use std::iter::FusedIterator;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::certification::Certification;
use crate::domain::{Level, Ranked, Version};

/// Number of `(level, version)` pairs.
const DOMAIN_SIZE: usize = Level::COUNT * Version::COUNT;

/// Number of storage words needed for the domain.
const WORDS: usize = DOMAIN_SIZE.div_ceil(u64::BITS as usize);

/// A set of certifications stored as one bit per `(level, version)` pair.
///
/// Not internally synchronized. Share across threads behind your own lock.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct CertificationSet {
    bits: [u64; WORDS],
}

impl CertificationSet {
    /// Number of distinct certifications, `Level::COUNT * Version::COUNT`.
    pub const CAPACITY: usize = DOMAIN_SIZE;

    /// An empty set.
    pub const fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    /// Flat bit index of `cert`, in `0..CAPACITY`.
    pub fn index_of(cert: Certification) -> usize {
        cert.level().rank() * Version::COUNT + cert.version().rank()
    }

    /// Inverse of [`index_of`](Self::index_of). `None` for
    /// `index >= CAPACITY`.
    pub fn certification_at(index: usize) -> Option<Certification> {
        if index >= Self::CAPACITY {
            return None;
        }
        let level = Level::from_rank(index / Version::COUNT)?;
        let version = Version::from_rank(index % Version::COUNT)?;
        Some(Certification::new(level, version))
    }

    fn locate(cert: Certification) -> (usize, u64) {
        let index = Self::index_of(cert);
        (index / 64, 1u64 << (index % 64))
    }

    /// Insert `cert`. Returns `true` if it was not already present.
    pub fn add(&mut self, cert: Certification) -> bool {
        let (word, mask) = Self::locate(cert);
        let absent = self.bits[word] & mask == 0;
        self.bits[word] |= mask;
        absent
    }

    /// Remove `cert`. Returns `true` if it was present.
    pub fn remove(&mut self, cert: Certification) -> bool {
        let (word, mask) = Self::locate(cert);
        let present = self.bits[word] & mask != 0;
        self.bits[word] &= !mask;
        present
    }

    /// Whether `cert` is in the set.
    pub fn contains(&self, cert: Certification) -> bool {
        let (word, mask) = Self::locate(cert);
        self.bits[word] & mask != 0
    }

    /// Remove every certification.
    pub fn clear(&mut self) {
        self.bits = [0; WORDS];
    }

    /// Number of certifications in the set.
    pub fn count(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    /// Iterate in descending `(level, version)` order.
    ///
    /// The iterator works on a snapshot taken when it is created; later
    /// changes to the set are not observed. Creating a new iterator replays
    /// the current contents.
    pub fn iter(&self) -> Iter {
        Iter { bits: self.bits }
    }

    /// The highest-level, most-recent certification, if any.
    pub fn first(&self) -> Option<Certification> {
        self.iter().next()
    }

    /// The highest level held under `version`, if any.
    pub fn highest_for_version(&self, version: Version) -> Option<Certification> {
        self.iter().find(|c| c.version() == version)
    }

    /// Levels held under `version`, highest first.
    pub fn levels_for(&self, version: Version) -> impl Iterator<Item = Level> + '_ {
        self.iter()
            .filter(move |c| c.version() == version)
            .map(|c| c.level())
    }

    // -- Set algebra ----------------------------------------------------------

    fn zip_with(&self, other: &Self, op: impl Fn(u64, u64) -> u64) -> Self {
        let mut out = Self::new();
        for (i, word) in out.bits.iter_mut().enumerate() {
            *word = op(self.bits[i], other.bits[i]);
        }
        out
    }

    /// Certifications in either set.
    pub fn union(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a | b)
    }

    /// Certifications in both sets.
    pub fn intersect(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a & b)
    }

    /// Certifications in `self` but not in `other`.
    pub fn except(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a & !b)
    }

    /// Certifications in exactly one of the two sets.
    pub fn symmetric_except(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a ^ b)
    }

    /// In-place [`union`](Self::union).
    pub fn union_with(&mut self, other: &Self) {
        *self = self.union(other);
    }

    /// In-place [`intersect`](Self::intersect).
    pub fn intersect_with(&mut self, other: &Self) {
        *self = self.intersect(other);
    }

    /// In-place [`except`](Self::except).
    pub fn except_with(&mut self, other: &Self) {
        *self = self.except(other);
    }

    /// In-place [`symmetric_except`](Self::symmetric_except).
    pub fn symmetric_except_with(&mut self, other: &Self) {
        *self = self.symmetric_except(other);
    }

    /// Every element of `self` is in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .all(|(a, b)| a & !b == 0)
    }

    /// Every element of `other` is in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Subset of `other` and not equal to it.
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.is_subset(other) && self != other
    }

    /// Superset of `other` and not equal to it.
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        other.is_proper_subset(self)
    }

    /// The two sets share at least one element.
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.intersect(other).is_empty()
    }

    /// Both sets contain exactly the same elements.
    pub fn set_equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl std::fmt::Debug for CertificationSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Certification> for CertificationSet {
    fn from_iter<I: IntoIterator<Item = Certification>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Certification> for CertificationSet {
    fn extend<I: IntoIterator<Item = Certification>>(&mut self, iter: I) {
        for cert in iter {
            self.add(cert);
        }
    }
}

impl<const N: usize> From<[Certification; N]> for CertificationSet {
    fn from(certs: [Certification; N]) -> Self {
        certs.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a CertificationSet {
    type Item = Certification;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl Serialize for CertificationSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for CertificationSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let certs = Vec::<Certification>::deserialize(deserializer)?;
        Ok(certs.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Iter
// ---------------------------------------------------------------------------

/// Descending iterator over a snapshot of a [`CertificationSet`].
///
/// `next` yields from the highest index, `next_back` from the lowest.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: [u64; WORDS],
}

impl Iterator for Iter {
    type Item = Certification;

    fn next(&mut self) -> Option<Certification> {
        let (word_index, word) = self
            .bits
            .iter_mut()
            .enumerate()
            .rev()
            .find(|(_, w)| **w != 0)?;
        let bit = 63 - word.leading_zeros() as usize;
        *word &= !(1u64 << bit);
        CertificationSet::certification_at(word_index * 64 + bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining: usize = self.bits.iter().map(|w| w.count_ones() as usize).sum();
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter {
    fn next_back(&mut self) -> Option<Certification> {
        let (word_index, word) = self
            .bits
            .iter_mut()
            .enumerate()
            .find(|(_, w)| **w != 0)?;
        let bit = word.trailing_zeros() as usize;
        *word &= !(1u64 << bit);
        CertificationSet::certification_at(word_index * 64 + bit)
    }
}

impl ExactSizeIterator for Iter {}

impl FusedIterator for Iter {}

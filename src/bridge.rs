//! This module implements the Bridge Iterator, a pull handle over a bulk
//! enumeration, and the arena that hands out scalar handles to it.
//!
//! A `BridgeIterator` captures its snapshot exactly once, when it is
//! created. Later changes to the host environment are never observed by an
//! existing iterator.

use alloc::{collections::BTreeMap, string::String, vec::Vec};
use core::{fmt, str::FromStr};

use crate::{
    era, parsers,
    provider::{DefaultZoneIdProvider, ZoneIdProvider},
    BridgeError, BridgeResult,
};

/// The bulk enumerations a `BridgeIterator` can be created over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumerationCategory {
    /// Every time zone identifier known to the provider.
    AvailableZoneIds,
    /// Every locale with era display name data.
    AvailableLocales,
}

impl EnumerationCategory {
    /// Returns this category's canonical selector.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::AvailableZoneIds => "available zone identifiers",
            Self::AvailableLocales => "available locales",
        }
    }
}

/// A parsing error for `EnumerationCategory`.
#[derive(Debug, Clone, Copy)]
pub struct ParseEnumerationCategoryError;

impl fmt::Display for ParseEnumerationCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid enumeration category")
    }
}

impl FromStr for EnumerationCategory {
    type Err = ParseEnumerationCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available zone identifiers" | "zone-ids" => Ok(Self::AvailableZoneIds),
            "available locales" | "locales" => Ok(Self::AvailableLocales),
            _ => Err(ParseEnumerationCategoryError),
        }
    }
}

impl fmt::Display for EnumerationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// The lifecycle state of a `BridgeIterator`.
///
/// An iterator moves from `Created` to `Active` to `Exhausted` and never
/// returns to an earlier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IteratorState {
    /// No element has been taken yet.
    Created,
    /// At least one element has been taken and at least one remains.
    Active,
    /// Every element has been taken.
    Exhausted,
}

/// A pull-based cursor over an enumeration snapshot.
///
/// ```rust
/// use temporal_bridge::{BridgeIterator, EnumerationCategory, ErrorKind};
///
/// let mut locales = BridgeIterator::create(EnumerationCategory::AvailableLocales).unwrap();
/// let mut seen = Vec::new();
/// while locales.has_next() {
///     seen.push(locales.next().unwrap());
/// }
/// assert!(seen.iter().any(|l| l == "en"));
/// assert_eq!(locales.next().unwrap_err().kind(), ErrorKind::ExhaustedIterator);
/// ```
#[derive(Debug, Clone)]
pub struct BridgeIterator {
    category: EnumerationCategory,
    snapshot: Vec<String>,
    cursor: usize,
}

impl BridgeIterator {
    /// Creates an iterator over `category` using the default provider.
    pub fn create(category: EnumerationCategory) -> BridgeResult<Self> {
        Self::create_with_provider(category, &DefaultZoneIdProvider::default())
    }

    /// Creates an iterator over `category`, sourcing zone identifiers from
    /// `provider`.
    ///
    /// Zone identifiers are limited to regions (`Area/Location`), `UTC`,
    /// and fixed offsets; single component aliases such as `Cuba` are
    /// dropped from the snapshot.
    ///
    /// Fails with an enumeration unavailable error if the provider cannot
    /// produce a snapshot, or produces an empty one.
    pub fn create_with_provider(
        category: EnumerationCategory,
        provider: &(impl ZoneIdProvider + ?Sized),
    ) -> BridgeResult<Self> {
        let snapshot = match category {
            EnumerationCategory::AvailableZoneIds => {
                let mut zone_ids = provider.available_zone_ids()?;
                zone_ids.retain(|id| {
                    let keep = parsers::is_region_or_fixed_offset(id);
                    if !keep {
                        trace!("dropping zone alias {id}");
                    }
                    keep
                });
                zone_ids
            }
            EnumerationCategory::AvailableLocales => {
                era::supported_languages().map(String::from).collect()
            }
        };
        Self::from_snapshot(category, snapshot)
    }

    pub(crate) fn from_snapshot(
        category: EnumerationCategory,
        snapshot: Vec<String>,
    ) -> BridgeResult<Self> {
        if snapshot.is_empty() {
            warn!("provider produced an empty snapshot for {category}");
            return Err(BridgeError::enumeration_unavailable()
                .with_message("the host environment produced an empty enumeration."));
        }
        debug!("captured {} elements for {category}", snapshot.len());
        Ok(Self {
            category,
            snapshot,
            cursor: 0,
        })
    }

    /// Returns the category this iterator enumerates.
    #[inline]
    #[must_use]
    pub fn category(&self) -> EnumerationCategory {
        self.category
    }

    /// Returns whether at least one more element remains.
    #[inline]
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.cursor < self.snapshot.len()
    }

    /// Returns the next element and advances the cursor.
    ///
    /// Fails with an exhausted iterator error once every element has been
    /// taken.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> BridgeResult<String> {
        let element = self
            .snapshot
            .get_mut(self.cursor)
            .ok_or_else(BridgeError::exhausted_iterator)?;
        let element = core::mem::take(element);
        self.cursor += 1;
        Ok(element)
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> IteratorState {
        if !self.has_next() {
            IteratorState::Exhausted
        } else if self.cursor == 0 {
            IteratorState::Created
        } else {
            IteratorState::Active
        }
    }

    /// Returns the size of the snapshot.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    /// Returns whether the snapshot is empty, which is never the case for
    /// a successfully created iterator.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Returns the number of elements not yet taken.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.snapshot.len() - self.cursor
    }
}

// ==== Arena ====

/// An opaque handle to an iterator owned by an `IteratorArena`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IteratorHandle(u64);

impl IteratorHandle {
    /// Creates a handle from a raw value received from a guest.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value to pass to a guest.
    #[inline]
    #[must_use]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

/// A table of live iterators addressed by scalar handles, for guests that
/// can only carry integers across the boundary.
///
/// Handles are never reused within one arena, so a released handle stays
/// invalid.
#[derive(Debug, Default)]
pub struct IteratorArena {
    iterators: BTreeMap<u64, BridgeIterator>,
    last_handle: u64,
}

impl IteratorArena {
    /// Creates an arena with no live iterators.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an iterator over `category` with the default provider and
    /// returns its handle.
    pub fn create(&mut self, category: EnumerationCategory) -> BridgeResult<IteratorHandle> {
        let iterator = BridgeIterator::create(category)?;
        self.insert(iterator)
    }

    /// Creates an iterator over `category` with `provider` and returns its
    /// handle.
    pub fn create_with_provider(
        &mut self,
        category: EnumerationCategory,
        provider: &(impl ZoneIdProvider + ?Sized),
    ) -> BridgeResult<IteratorHandle> {
        let iterator = BridgeIterator::create_with_provider(category, provider)?;
        self.insert(iterator)
    }

    /// Moves an existing iterator into the arena.
    pub fn insert(&mut self, iterator: BridgeIterator) -> BridgeResult<IteratorHandle> {
        let handle = self
            .last_handle
            .checked_add(1)
            .ok_or_else(|| BridgeError::general("iterator handle space is exhausted"))?;
        self.last_handle = handle;
        self.iterators.insert(handle, iterator);
        trace!("allocated iterator handle {handle}");
        Ok(IteratorHandle(handle))
    }

    /// Returns the iterator behind `handle`.
    pub fn get(&self, handle: IteratorHandle) -> BridgeResult<&BridgeIterator> {
        self.iterators
            .get(&handle.0)
            .ok_or_else(BridgeError::invalid_handle)
    }

    fn get_mut(&mut self, handle: IteratorHandle) -> BridgeResult<&mut BridgeIterator> {
        self.iterators
            .get_mut(&handle.0)
            .ok_or_else(BridgeError::invalid_handle)
    }

    /// Returns whether the iterator behind `handle` has an element left.
    pub fn has_next(&self, handle: IteratorHandle) -> BridgeResult<bool> {
        self.get(handle).map(BridgeIterator::has_next)
    }

    /// Takes the next element from the iterator behind `handle`.
    pub fn next(&mut self, handle: IteratorHandle) -> BridgeResult<String> {
        self.get_mut(handle)?.next()
    }

    /// Destroys the iterator behind `handle`.
    pub fn release(&mut self, handle: IteratorHandle) -> BridgeResult<()> {
        if self.iterators.remove(&handle.0).is_none() {
            return Err(BridgeError::invalid_handle());
        }
        trace!("released iterator handle {}", handle.0);
        Ok(())
    }

    /// Returns the number of live iterators.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.iterators.len()
    }

    /// Returns whether no iterator is live.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iterators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{provider::NeverProvider, ErrorKind};
    use alloc::{collections::BTreeSet, vec};

    const ZONES: [&str; 3] = ["UTC", "Europe/Paris", "America/New_York"];

    fn zones() -> BridgeIterator {
        BridgeIterator::create_with_provider(EnumerationCategory::AvailableZoneIds, &ZONES[..])
            .unwrap()
    }

    #[test]
    fn drain_then_exhaust() {
        let mut iter = zones();
        assert_eq!(iter.state(), IteratorState::Created);
        assert!(iter.has_next());

        let mut taken = vec![];
        while iter.has_next() {
            taken.push(iter.next().unwrap());
            if iter.has_next() {
                assert_eq!(iter.state(), IteratorState::Active);
            }
        }
        assert_eq!(taken.len(), ZONES.len());
        assert_eq!(iter.state(), IteratorState::Exhausted);
        assert_eq!(iter.remaining(), 0);

        let err = iter.next().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExhaustedIterator);
        assert!(!iter.has_next());
        assert_eq!(iter.state(), IteratorState::Exhausted);
    }

    #[test]
    fn independent_iterators_yield_the_same_set() {
        let drain = |mut iter: BridgeIterator| {
            let mut set = BTreeSet::new();
            while iter.has_next() {
                set.insert(iter.next().unwrap());
            }
            set
        };
        assert_eq!(drain(zones()), drain(zones()));
    }

    #[test]
    fn has_next_is_pure() {
        let iter = zones();
        for _ in 0..10 {
            assert!(iter.has_next());
        }
        assert_eq!(iter.remaining(), ZONES.len());
    }

    #[test]
    fn legacy_aliases_are_dropped() {
        let ids = ["Cuba", "Europe/Paris", "EST5EDT", "UTC", "Etc/GMT+5", "GMT0"];
        let mut iter =
            BridgeIterator::create_with_provider(EnumerationCategory::AvailableZoneIds, &ids[..])
                .unwrap();
        let mut taken = vec![];
        while iter.has_next() {
            taken.push(iter.next().unwrap());
        }
        assert_eq!(taken, ["Europe/Paris", "UTC", "Etc/GMT+5"]);

        let aliases = ["Cuba", "Egypt"];
        let err =
            BridgeIterator::create_with_provider(EnumerationCategory::AvailableZoneIds, &aliases[..])
                .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EnumerationUnavailable);
    }

    #[test]
    fn unavailable_snapshots() {
        let err = BridgeIterator::create_with_provider(
            EnumerationCategory::AvailableZoneIds,
            &NeverProvider,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EnumerationUnavailable);

        let empty: [&str; 0] = [];
        let err =
            BridgeIterator::create_with_provider(EnumerationCategory::AvailableZoneIds, &empty[..])
                .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EnumerationUnavailable);
    }

    #[test]
    fn locales_ignore_the_zone_provider() {
        let iter =
            BridgeIterator::create_with_provider(EnumerationCategory::AvailableLocales, &NeverProvider)
                .unwrap();
        assert_eq!(iter.len(), 6);
        assert_eq!(iter.category(), EnumerationCategory::AvailableLocales);
    }

    #[test]
    fn selectors() {
        for category in [
            EnumerationCategory::AvailableZoneIds,
            EnumerationCategory::AvailableLocales,
        ] {
            assert_eq!(category.selector().parse::<EnumerationCategory>().unwrap(), category);
        }
        assert_eq!(
            "zone-ids".parse::<EnumerationCategory>().unwrap(),
            EnumerationCategory::AvailableZoneIds
        );
        assert!("zones".parse::<EnumerationCategory>().is_err());
    }

    #[test]
    fn arena_handles() {
        let mut arena = IteratorArena::new();
        let first = arena
            .create_with_provider(EnumerationCategory::AvailableZoneIds, &ZONES[..])
            .unwrap();
        let second = arena
            .create_with_provider(EnumerationCategory::AvailableZoneIds, &ZONES[..])
            .unwrap();
        assert_ne!(first, second);
        assert_eq!(arena.len(), 2);

        while arena.has_next(first).unwrap() {
            arena.next(first).unwrap();
        }
        assert_eq!(arena.next(first).unwrap_err().kind(), ErrorKind::ExhaustedIterator);
        // Draining one handle leaves the other untouched.
        assert_eq!(arena.get(second).unwrap().remaining(), ZONES.len());

        arena.release(first).unwrap();
        assert_eq!(arena.has_next(first).unwrap_err().kind(), ErrorKind::InvalidHandle);
        assert_eq!(arena.next(first).unwrap_err().kind(), ErrorKind::InvalidHandle);
        assert_eq!(arena.release(first).unwrap_err().kind(), ErrorKind::InvalidHandle);

        let third = arena
            .create_with_provider(EnumerationCategory::AvailableZoneIds, &ZONES[..])
            .unwrap();
        assert_ne!(third, first);
        assert_eq!(
            arena.has_next(IteratorHandle::from_raw(0)).unwrap_err().kind(),
            ErrorKind::InvalidHandle
        );
    }
}

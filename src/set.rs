//! A deduplicating collection of CIDs, optionally carrying a value per CID.

use sp_std::{
  collections::btree_map::{
    self,
    BTreeMap,
  },
  iter::FromIterator,
  vec::Vec,
};

use crate::cid::{
  Cid,
  CidGeneric,
};

/// CIDs keyed by their binary form. `Set<()>` is a plain set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Set<V = ()> {
  set: BTreeMap<Cid, V>,
}

impl<V> Default for Set<V> {
  fn default() -> Self { Set { set: BTreeMap::new() } }
}

impl<V> Set<V> {
  /// An empty set.
  pub fn new() -> Self { Self::default() }

  /// Inserts `cid` with `value`, replacing any previous value.
  pub fn add_pair(&mut self, cid: Cid, value: V) { self.set.insert(cid, value); }

  /// Whether `cid` is in the set.
  pub fn has<S: AsRef<[u8]>>(&self, cid: &CidGeneric<S>) -> bool {
    self.set.contains_key(cid.as_bytes())
  }

  /// The value stored for `cid`.
  pub fn get<S: AsRef<[u8]>>(&self, cid: &CidGeneric<S>) -> Option<&V> {
    self.set.get(cid.as_bytes())
  }

  /// Removes `cid`. Removing an absent CID does nothing.
  pub fn remove<S: AsRef<[u8]>>(&mut self, cid: &CidGeneric<S>) {
    self.set.remove(cid.as_bytes());
  }

  /// Number of distinct CIDs.
  pub fn len(&self) -> usize { self.set.len() }

  /// True when the set holds no CIDs.
  pub fn is_empty(&self) -> bool { self.set.is_empty() }

  /// Every CID in the set.
  pub fn keys(&self) -> Vec<Cid> { self.set.keys().cloned().collect() }

  /// Inserts `cid` with `value` if it is absent. If it is present,
  /// `replace(current, new)` decides whether `value` overwrites it.
  ///
  /// Returns true when `value` was stored.
  pub fn visit_pair<F>(&mut self, cid: Cid, value: V, replace: F) -> bool
  where F: FnOnce(&V, &V) -> bool {
    match self.set.entry(cid) {
      btree_map::Entry::Vacant(entry) => {
        entry.insert(value);
        true
      }
      btree_map::Entry::Occupied(mut entry) => {
        if replace(entry.get(), &value) {
          entry.insert(value);
          true
        }
        else {
          false
        }
      }
    }
  }

  /// Calls `f` on every CID, stopping at the first error.
  ///
  /// # Errors
  ///
  /// Returns the first error `f` returns.
  pub fn for_each<E, F>(&self, mut f: F) -> Result<(), E>
  where F: FnMut(&Cid) -> Result<(), E> {
    for cid in self.set.keys() {
      f(cid)?;
    }
    Ok(())
  }

  /// Calls `f` on every CID and its value, stopping at the first error.
  ///
  /// # Errors
  ///
  /// Returns the first error `f` returns.
  pub fn for_each_pair<E, F>(&self, mut f: F) -> Result<(), E>
  where F: FnMut(&Cid, &V) -> Result<(), E> {
    for (cid, value) in self.set.iter() {
      f(cid, value)?;
    }
    Ok(())
  }

  /// Iterates over the entries in byte order of the CIDs.
  pub fn iter(&self) -> btree_map::Iter<'_, Cid, V> { self.set.iter() }
}

impl<V: Default> Set<V> {
  /// Inserts `cid` with the default value, replacing any previous value.
  pub fn add(&mut self, cid: Cid) { self.add_pair(cid, V::default()) }

  /// Inserts `cid` if it is absent. Returns true when it was inserted.
  pub fn visit(&mut self, cid: Cid) -> bool {
    self.visit_pair(cid, V::default(), |_, _| false)
  }
}

impl<V: Default> Extend<Cid> for Set<V> {
  fn extend<I: IntoIterator<Item = Cid>>(&mut self, iter: I) {
    for cid in iter {
      self.add(cid);
    }
  }
}

impl<V: Default> FromIterator<Cid> for Set<V> {
  fn from_iter<I: IntoIterator<Item = Cid>>(iter: I) -> Self {
    let mut set = Set::new();
    set.extend(iter);
    set
  }
}

impl<'a, V> IntoIterator for &'a Set<V> {
  type IntoIter = btree_map::Iter<'a, Cid, V>;
  type Item = (&'a Cid, &'a V);

  fn into_iter(self) -> Self::IntoIter { self.iter() }
}

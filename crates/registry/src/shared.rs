//! Copy-on-write registry for concurrent use.
//!
//! # Role
//!
//! [`Registry`] has no internal synchronization. [`SharedRegistry`] publishes
//! immutable [`Registry`] snapshots through an [`ArcSwap`]: readers load the
//! current snapshot without locking, writers clone it, apply their change and
//! swap it in with a compare-and-swap loop.
//!
//! # Invariants
//!
//! - Concurrent registrations are linearizable; none is lost.
//! - A snapshot never changes once published. Readers holding one are
//!   unaffected by later writes.

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

use crate::entry::ConversionEntry;
use crate::error::MapError;
use crate::key::TypePair;
use crate::registry::Registry;
use crate::sequence::Sequence;
use crate::shape::Shape;

/// Thread-safe [`Registry`] with lock-free reads.
pub struct SharedRegistry {
	snap: ArcSwap<Registry>,
}

impl Default for SharedRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl From<Registry> for SharedRegistry {
	fn from(registry: Registry) -> Self {
		Self {
			snap: ArcSwap::from_pointee(registry),
		}
	}
}

impl SharedRegistry {
	/// Creates an empty shared registry.
	pub fn new() -> Self {
		Registry::new().into()
	}

	/// Returns the current snapshot.
	pub fn snapshot(&self) -> Arc<Registry> {
		self.snap.load_full()
	}

	/// Applies `f` to a copy of the current registry and publishes the result.
	///
	/// `f` may run more than once if another writer wins the race.
	pub fn update<F>(&self, mut f: F)
	where
		F: FnMut(&mut Registry),
	{
		let prev = self.snap.rcu(|current| {
			let mut next = Registry::clone(current);
			f(&mut next);
			next
		});
		tracing::debug!(previous = prev.len(), current = self.snap.load().len(), "registry snapshot published");
	}

	/// See [`Registry::register`].
	pub fn register<S, D, F>(&self, f: F)
	where
		S: Shape,
		D: Shape,
		F: Fn(S) -> D + Send + Sync + 'static,
	{
		self.insert(Arc::new(ConversionEntry::new(f)));
	}

	/// See [`Registry::insert`].
	pub fn insert(&self, entry: Arc<ConversionEntry>) -> bool {
		let mut overwritten = false;
		self.update(|registry| overwritten = registry.insert(Arc::clone(&entry)));
		overwritten
	}

	/// See [`Registry::remove`].
	pub fn remove<S: Shape, D: Shape>(&self) -> bool {
		self.remove_pair(TypePair::of_shapes::<S, D>())
	}

	pub fn remove_pair(&self, pair: TypePair) -> bool {
		if self.snap.load().get(pair).is_none() {
			return false;
		}
		let mut removed = false;
		self.update(|registry| removed = registry.remove_pair(pair));
		removed
	}

	/// Removes every entry.
	pub fn clear(&self) {
		self.snap.store(Arc::new(Registry::new()));
	}

	pub fn has<S: Shape, D: Shape>(&self) -> bool {
		self.snap.load().has::<S, D>()
	}

	pub fn list(&self) -> Vec<String> {
		self.snap.load().list()
	}

	pub fn len(&self) -> usize {
		self.snap.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.snap.load().is_empty()
	}

	/// See [`Registry::map`].
	pub fn map<S: Shape, D: Shape>(&self, src: S) -> Result<D, MapError> {
		self.snap.load().map(src)
	}

	/// See [`Registry::map_slice`].
	pub fn map_slice<S: Sequence, D: Sequence>(&self, src: S) -> Result<D, MapError> {
		self.snap.load().map_slice(src)
	}

	#[track_caller]
	pub fn must_map<S: Shape, D: Shape>(&self, src: S) -> D {
		self.snap.load().must_map(src)
	}

	#[track_caller]
	pub fn must_map_slice<S: Sequence, D: Sequence>(&self, src: S) -> D {
		self.snap.load().must_map_slice(src)
	}
}

impl std::fmt::Debug for SharedRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("SharedRegistry").field(&**self.snap.load()).finish()
	}
}

static GLOBAL: LazyLock<SharedRegistry> = LazyLock::new(SharedRegistry::new);

/// Process-wide registry, created empty on first use.
///
/// Prefer an owned [`Registry`] where practical; tests in particular should
/// construct their own.
pub fn global() -> &'static SharedRegistry {
	&GLOBAL
}

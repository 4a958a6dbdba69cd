//! The conversion registry.
//!
//! # Role
//!
//! Owns the map from [`TypePair`] to [`ConversionEntry`] and exposes the typed
//! register / lookup / remove / enumerate surface. Lookups hand the entry to
//! [`dispatch`](crate::dispatch) for shape normalization.
//!
//! # Invariants
//!
//! - At most one entry per pair; registering again replaces the old entry.
//! - A missing pair means "unconvertible", never "identity".
//! - No internal synchronization: mutation takes `&mut self`. See
//!   [`SharedRegistry`](crate::SharedRegistry) for concurrent use.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::dispatch;
use crate::entry::ConversionEntry;
use crate::error::MapError;
use crate::key::TypePair;
use crate::sequence::Sequence;
use crate::shape::Shape;

/// Registry of conversions keyed by dereferenced (source, destination) types.
#[derive(Default, Clone)]
pub struct Registry {
	entries: FxHashMap<TypePair, Arc<ConversionEntry>>,
}

impl Registry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `f` as the conversion from `S`'s element type to `D`'s.
	///
	/// `f` may take or return either a value or a [`Ptr`](crate::Ptr); it is
	/// stored as given and adapted at dispatch time. Any previous entry for the
	/// same pair is replaced.
	pub fn register<S, D, F>(&mut self, f: F)
	where
		S: Shape,
		D: Shape,
		F: Fn(S) -> D + Send + Sync + 'static,
	{
		self.insert(Arc::new(ConversionEntry::new(f)));
	}

	/// Inserts a prebuilt entry, returning true if it replaced another.
	pub fn insert(&mut self, entry: Arc<ConversionEntry>) -> bool {
		let pair = entry.pair();
		let (input, output) = (entry.input(), entry.output());
		let overwritten = self.entries.insert(pair, entry).is_some();
		tracing::debug!(%pair, ?input, ?output, overwritten, "conversion registered");
		overwritten
	}

	/// Returns true if a conversion is registered for the pair.
	pub fn has<S: Shape, D: Shape>(&self) -> bool {
		self.entries.contains_key(&TypePair::of_shapes::<S, D>())
	}

	/// Removes the conversion for the pair, if any. Returns true if one was removed.
	pub fn remove<S: Shape, D: Shape>(&mut self) -> bool {
		self.remove_pair(TypePair::of_shapes::<S, D>())
	}

	pub fn remove_pair(&mut self, pair: TypePair) -> bool {
		let removed = self.entries.remove(&pair).is_some();
		if removed {
			tracing::debug!(%pair, "conversion removed");
		}
		removed
	}

	/// Returns the stored entry for `pair`.
	pub fn get(&self, pair: TypePair) -> Option<&Arc<ConversionEntry>> {
		self.entries.get(&pair)
	}

	/// Returns one `"<source>-<destination>"` label per entry, in no particular order.
	///
	/// The returned vector is a fresh copy on every call.
	pub fn list(&self) -> Vec<String> {
		self.entries.keys().map(TypePair::label).collect()
	}

	/// Iterates the registered pairs.
	pub fn pairs(&self) -> impl Iterator<Item = TypePair> + '_ {
		self.entries.keys().copied()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Removes every entry.
	pub fn clear(&mut self) {
		self.entries.clear();
	}

	/// Converts `src` into `D` using the conversion registered for their
	/// element types.
	///
	/// A nil [`Ptr`](crate::Ptr) source returns `D`'s nil (or zero value)
	/// without invoking the stored function.
	///
	/// # Errors
	///
	/// [`MapError::NotRegistered`] if no conversion exists for the pair.
	pub fn map<S: Shape, D: Shape>(&self, src: S) -> Result<D, MapError> {
		let entry = self.lookup(TypePair::of_shapes::<S, D>())?;
		dispatch::convert(entry, src)
	}

	/// Converts every element of `src`, preserving length and order.
	///
	/// Nil source elements map to nil (pointer destination) or the zero value
	/// (value destination) without invoking the stored function.
	///
	/// # Errors
	///
	/// - [`MapError::ShapeMismatch`] if `D` is fixed-length and cannot hold
	///   `src`'s elements. Checked before the lookup.
	/// - [`MapError::NotRegistered`] if no conversion exists for the element pair.
	pub fn map_slice<S: Sequence, D: Sequence>(&self, src: S) -> Result<D, MapError> {
		let len = src.item_count();
		if !D::holds(len) {
			return Err(MapError::shape_mismatch::<S, D>(len));
		}
		let entry = self.lookup(TypePair::of_shapes::<S::Item, D::Item>())?;
		dispatch::convert_sequence(entry, src)
	}

	/// Like [`Registry::map`], panicking on failure.
	#[track_caller]
	pub fn must_map<S: Shape, D: Shape>(&self, src: S) -> D {
		match self.map(src) {
			Ok(dst) => dst,
			Err(e) => panic!("{e}"),
		}
	}

	/// Like [`Registry::map_slice`], panicking on failure.
	#[track_caller]
	pub fn must_map_slice<S: Sequence, D: Sequence>(&self, src: S) -> D {
		match self.map_slice(src) {
			Ok(dst) => dst,
			Err(e) => panic!("{e}"),
		}
	}

	fn lookup(&self, pair: TypePair) -> Result<&ConversionEntry, MapError> {
		self.entries
			.get(&pair)
			.map(|entry| &**entry)
			.ok_or_else(|| MapError::not_registered(pair))
	}
}

impl fmt::Debug for Registry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.entries.keys()).finish()
	}
}

//! Collection shapes accepted by the slice path.

use std::collections::VecDeque;

use crate::shape::Shape;

/// An ordered, owned sequence of [`Shape`] items.
pub trait Sequence: Sized + 'static {
	type Item: Shape;

	fn item_count(&self) -> usize;

	/// Whether a sequence of `len` items can be built. Fixed-length
	/// sequences accept exactly their length.
	fn holds(len: usize) -> bool {
		let _ = len;
		true
	}

	fn into_items(self) -> impl Iterator<Item = Self::Item>;

	/// Builds the sequence, or returns `None` if `items` has a length
	/// [`Sequence::holds`] rejects.
	fn from_items(items: Vec<Self::Item>) -> Option<Self>;
}

impl<T: Shape> Sequence for Vec<T> {
	type Item = T;

	fn item_count(&self) -> usize {
		self.len()
	}

	fn into_items(self) -> impl Iterator<Item = T> {
		self.into_iter()
	}

	fn from_items(items: Vec<T>) -> Option<Self> {
		Some(items)
	}
}

impl<T: Shape> Sequence for Box<[T]> {
	type Item = T;

	fn item_count(&self) -> usize {
		self.len()
	}

	fn into_items(self) -> impl Iterator<Item = T> {
		self.into_vec().into_iter()
	}

	fn from_items(items: Vec<T>) -> Option<Self> {
		Some(items.into_boxed_slice())
	}
}

impl<T: Shape> Sequence for VecDeque<T> {
	type Item = T;

	fn item_count(&self) -> usize {
		self.len()
	}

	fn into_items(self) -> impl Iterator<Item = T> {
		self.into_iter()
	}

	fn from_items(items: Vec<T>) -> Option<Self> {
		Some(items.into())
	}
}

impl<T: Shape, const N: usize> Sequence for [T; N] {
	type Item = T;

	fn item_count(&self) -> usize {
		N
	}

	fn holds(len: usize) -> bool {
		len == N
	}

	fn into_items(self) -> impl Iterator<Item = T> {
		self.into_iter()
	}

	fn from_items(items: Vec<T>) -> Option<Self> {
		items.try_into().ok()
	}
}

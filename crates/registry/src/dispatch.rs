//! Dispatch normalization between caller shapes and stored callables.
//!
//! # Role
//!
//! Reconciles the caller's static shapes (value or [`Ptr`](crate::Ptr) on either
//! side) with whatever shapes the stored callable declared. One uniform path
//! serves every combination; the slice path applies it per element.
//!
//! # Invariants
//!
//! - A nil input never reaches the stored callable; it maps to `D::nil()`.
//! - Results are adapted to the destination shape; a nil result read as a value
//!   becomes the zero value, never a dereference.
//! - Slice output length always equals input length, in input order.

use crate::entry::{Call, ConversionEntry};
use crate::error::MapError;
use crate::sequence::Sequence;
use crate::shape::{Shape, ShapeKind, Slot};

/// Converts one caller value through `entry`.
pub(crate) fn convert<S: Shape, D: Shape>(entry: &ConversionEntry, src: S) -> Result<D, MapError> {
	let call = typed_call::<S, D>(entry)?;
	Ok(apply::<S, D>(entry.input(), call, src.into_slot()))
}

/// Converts every element of `src` through `entry`.
pub(crate) fn convert_sequence<S, D>(entry: &ConversionEntry, src: S) -> Result<D, MapError>
where
	S: Sequence,
	D: Sequence,
{
	let call = typed_call::<S::Item, D::Item>(entry)?;
	let len = src.item_count();
	let input = entry.input();

	let mut out = Vec::with_capacity(len);
	out.extend(
		src.into_items()
			.map(|item| apply::<S::Item, D::Item>(input, call, item.into_slot())),
	);
	D::from_items(out).ok_or_else(|| MapError::shape_mismatch::<S, D>(len))
}

fn typed_call<S: Shape, D: Shape>(
	entry: &ConversionEntry,
) -> Result<&Call<S::Elem, D::Elem>, MapError> {
	entry
		.call::<S::Elem, D::Elem>()
		.ok_or_else(|| MapError::not_registered(entry.pair()))
}

#[inline]
fn apply<S: Shape, D: Shape>(
	input: ShapeKind,
	call: &Call<S::Elem, D::Elem>,
	slot: Slot<S::Elem>,
) -> D {
	if slot.is_nil() {
		return D::nil();
	}
	D::from_slot(call(slot.reshape(input)))
}

//! Type-erased conversion entries.
//!
//! # Role
//!
//! A [`ConversionEntry`] owns exactly the callable it was given at registration,
//! whatever shapes it declared, behind a `dyn Any`. The declared input and output
//! [`ShapeKind`]s are recorded next to it so the dispatcher can adapt arguments
//! and results without inspecting the callable.
//!
//! # Invariants
//!
//! - The erased callable is always a [`Call<S, D>`] over the element types of
//!   [`ConversionEntry::pair`], so a lookup by pair can always downcast.

use std::any::Any;
use std::fmt;

use crate::key::TypePair;
use crate::shape::{Shape, ShapeKind, Slot};

/// Erased callable signature over element types.
pub(crate) type Call<S, D> = dyn Fn(Slot<S>) -> Slot<D> + Send + Sync;

/// A stored conversion for one [`TypePair`].
pub struct ConversionEntry {
	pair: TypePair,
	input: ShapeKind,
	output: ShapeKind,
	call: Box<dyn Any + Send + Sync>,
}

impl ConversionEntry {
	/// Wraps `f`, recording the shapes of its parameter and return type.
	pub fn new<S, D, F>(f: F) -> Self
	where
		S: Shape,
		D: Shape,
		F: Fn(S) -> D + Send + Sync + 'static,
	{
		let call: Box<Call<S::Elem, D::Elem>> =
			Box::new(move |slot: Slot<S::Elem>| f(S::from_slot(slot)).into_slot());
		Self {
			pair: TypePair::of_shapes::<S, D>(),
			input: S::KIND,
			output: D::KIND,
			call: Box::new(call),
		}
	}

	pub fn pair(&self) -> TypePair {
		self.pair
	}

	/// Shape of the stored callable's parameter.
	pub fn input(&self) -> ShapeKind {
		self.input
	}

	/// Shape of the stored callable's return value.
	pub fn output(&self) -> ShapeKind {
		self.output
	}

	/// Recovers the typed callable for element types `S` and `D`.
	pub(crate) fn call<S: 'static, D: 'static>(&self) -> Option<&Call<S, D>> {
		self.call.downcast_ref::<Box<Call<S, D>>>().map(|b| &**b)
	}
}

impl fmt::Debug for ConversionEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ConversionEntry")
			.field("pair", &self.pair)
			.field("input", &self.input)
			.field("output", &self.output)
			.finish_non_exhaustive()
	}
}

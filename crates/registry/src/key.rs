//! Runtime type identities and the type-pair registry key.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::shape::{Shape, Value};

/// Runtime token for a concrete, dereferenced element type.
///
/// Equality and hashing use the [`TypeId`] only; the name is carried for labels.
#[derive(Clone, Copy)]
pub struct TypeIdentity {
	id: TypeId,
	name: &'static str,
}

impl TypeIdentity {
	pub fn of<T: Value>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			name: std::any::type_name::<T>(),
		}
	}

	/// Identity of the element behind a caller shape, pointer layer removed.
	pub fn of_shape<T: Shape>() -> Self {
		Self::of::<T::Elem>()
	}

	pub fn id(&self) -> TypeId {
		self.id
	}

	/// Fully qualified type name.
	pub fn name(&self) -> &'static str {
		self.name
	}
}

impl PartialEq for TypeIdentity {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for TypeIdentity {}

impl Hash for TypeIdentity {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl fmt::Debug for TypeIdentity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

impl fmt::Display for TypeIdentity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

/// Ordered (source, destination) identity pair addressing one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypePair {
	pub source: TypeIdentity,
	pub destination: TypeIdentity,
}

impl TypePair {
	pub fn of<S: Value, D: Value>() -> Self {
		Self {
			source: TypeIdentity::of::<S>(),
			destination: TypeIdentity::of::<D>(),
		}
	}

	/// Key for a pair of caller shapes, pointer layers stripped on both sides.
	pub fn of_shapes<S: Shape, D: Shape>() -> Self {
		Self::of::<S::Elem, D::Elem>()
	}

	/// Label in `"<source>-<destination>"` form.
	pub fn label(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for TypePair {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}-{}", self.source, self.destination)
	}
}

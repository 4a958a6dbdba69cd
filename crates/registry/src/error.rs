use thiserror::Error;

use crate::key::TypePair;

/// Errors returned by conversion lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
	/// No conversion is registered for the (dereferenced) type pair.
	#[error("no conversion registered for {from}-{to}")]
	NotRegistered {
		from: &'static str,
		to: &'static str,
	},
	/// The destination sequence cannot hold the source's elements.
	#[error("both source and destination must be sequences: cannot map {len} elements of {from} into {to}")]
	ShapeMismatch {
		from: &'static str,
		to: &'static str,
		len: usize,
	},
}

impl MapError {
	pub(crate) fn not_registered(pair: TypePair) -> Self {
		MapError::NotRegistered {
			from: pair.source.name(),
			to: pair.destination.name(),
		}
	}

	pub(crate) fn shape_mismatch<S, D>(len: usize) -> Self {
		MapError::ShapeMismatch {
			from: std::any::type_name::<S>(),
			to: std::any::type_name::<D>(),
			len,
		}
	}

	/// Returns true for [`MapError::NotRegistered`].
	pub fn is_not_registered(&self) -> bool {
		matches!(self, MapError::NotRegistered { .. })
	}
}

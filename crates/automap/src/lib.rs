//! Field-matching conversions for the morph registry.
//!
//! [`copy_fields`] is a best-effort structural copy: same-named, compatible
//! fields are carried over, everything else stays at the destination's zero
//! value. [`AutoMap::register_auto_map`] registers it in both directions as an
//! ordinary conversion, so it participates in value/pointer and slice dispatch
//! like any hand-written function.
//!
//! ```
//! use morph_automap::AutoMap;
//! use morph_registry::Registry;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
//! struct User {
//! 	id: u64,
//! 	name: String,
//! 	password: String,
//! }
//!
//! #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
//! struct UserDto {
//! 	id: u64,
//! 	name: String,
//! }
//!
//! morph_registry::impl_value!(User, UserDto);
//!
//! let mut registry = Registry::new();
//! registry.register_auto_map::<User, UserDto>();
//!
//! let user = User { id: 1, name: "ann".into(), password: "hunter2".into() };
//! let dto: UserDto = registry.map(user).unwrap();
//! assert_eq!(dto, UserDto { id: 1, name: "ann".into() });
//!
//! let back: User = registry.map(dto).unwrap();
//! assert_eq!(back.password, "");
//! ```

mod copy;
mod node;

use std::any::Any;
use std::sync::Arc;

use morph_registry::{ConversionEntry, Registry, Shape, Value};
#[cfg(feature = "registry-shared")]
use morph_registry::SharedRegistry;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use copy::copy_fields;

/// A value type the structural copier can read and build.
pub trait Structural: Value + Shape<Elem = Self> + Serialize + DeserializeOwned {}

impl<T> Structural for T where T: Value + Shape<Elem = Self> + Serialize + DeserializeOwned {}

/// Converts `src` into `D` by structural copy. Same-type pairs move the value.
pub fn auto_map<S: Structural, D: Structural>(src: S) -> D {
	let mut src = Some(src);
	if let Some(same) = (&mut src as &mut dyn Any).downcast_mut::<Option<D>>() {
		return same.take().unwrap_or_default();
	}
	src.map_or_else(D::default, |src| copy_fields(&src))
}

/// Entries for `S -> D` and `D -> S`, both backed by [`auto_map`].
pub fn auto_map_entries<S: Structural, D: Structural>() -> [Arc<ConversionEntry>; 2] {
	[
		Arc::new(ConversionEntry::new(auto_map::<S, D>)),
		Arc::new(ConversionEntry::new(auto_map::<D, S>)),
	]
}

/// Bidirectional structural registration.
pub trait AutoMap {
	/// Registers `S -> D` and `D -> S` conversions backed by [`copy_fields`],
	/// replacing any existing entries for either pair.
	fn register_auto_map<S: Structural, D: Structural>(self);
}

impl AutoMap for &mut Registry {
	fn register_auto_map<S: Structural, D: Structural>(self) {
		for entry in auto_map_entries::<S, D>() {
			self.insert(entry);
		}
		tracing::debug!(
			source = std::any::type_name::<S>(),
			destination = std::any::type_name::<D>(),
			"auto-map registered"
		);
	}
}

#[cfg(feature = "registry-shared")]
impl AutoMap for &SharedRegistry {
	/// Both directions are published in a single snapshot.
	fn register_auto_map<S: Structural, D: Structural>(self) {
		let entries = auto_map_entries::<S, D>();
		self.update(|registry| {
			for entry in &entries {
				registry.insert(Arc::clone(entry));
			}
		});
		tracing::debug!(
			source = std::any::type_name::<S>(),
			destination = std::any::type_name::<D>(),
			"auto-map registered"
		);
	}
}

#[cfg(test)]
mod tests;

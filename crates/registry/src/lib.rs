//! Type-pair keyed conversion registry.
//!
//! Conversions are registered once as plain functions and later looked up by
//! the (source, destination) element types of the caller's values. Either side
//! may be a value `T` or a nullable pointer [`Ptr<T>`]; the registry adapts the
//! call to whatever shapes the stored function declared.
//!
//! ```
//! use morph_registry::{Ptr, Registry};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Person {
//! 	name: String,
//! 	age: u32,
//! }
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct PersonDto {
//! 	full_name: String,
//! 	years: u32,
//! }
//!
//! morph_registry::impl_value!(Person, PersonDto);
//!
//! let mut registry = Registry::new();
//! registry.register(|p: Person| PersonDto {
//! 	full_name: p.name,
//! 	years: p.age,
//! });
//!
//! let john = Person { name: "John".into(), age: 30 };
//! let dto: Ptr<PersonDto> = registry.map(Some(Box::new(john))).unwrap();
//! assert_eq!(dto.unwrap().years, 30);
//!
//! let nil: PersonDto = registry.map(None::<Box<Person>>).unwrap();
//! assert_eq!(nil, PersonDto::default());
//! ```
//!
//! # Modules
//!
//! - [`shape`] - value/pointer classification and the [`impl_value!`] macro
//! - [`key`] - runtime type identities and the registry key
//! - [`entry`] - type-erased stored conversions
//! - [`registry`] - the registry itself
//! - [`sequence`] - collection types accepted by [`Registry::map_slice`]
//! - `shared` - copy-on-write [`SharedRegistry`] and the process-wide [`global`] instance

mod dispatch;
pub mod entry;
pub mod error;
pub mod key;
pub mod registry;
pub mod sequence;
pub mod shape;
#[cfg(feature = "shared")]
pub mod shared;

pub use entry::ConversionEntry;
pub use error::MapError;
pub use key::{TypeIdentity, TypePair};
pub use registry::Registry;
pub use sequence::Sequence;
pub use shape::{Ptr, Shape, ShapeKind, Slot, Value};
#[cfg(feature = "shared")]
pub use shared::{SharedRegistry, global};

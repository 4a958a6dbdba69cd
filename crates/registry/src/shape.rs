//! Value/pointer shape classification.
//!
//! # Role
//!
//! Every caller-facing type is either a plain value `T` or a nullable pointer
//! [`Ptr<T>`]. [`Shape`] names the element type `T` behind either form so the
//! registry can key on it, and moves values in and out of [`Slot`], the closed
//! union the dispatcher pattern-matches on.
//!
//! # Invariants
//!
//! - Reshaping is total: a nil pointer read as a value yields `T::default()`.
//! - The element type of a [`Ptr<T>`] is `T`, never the pointer itself.

/// Nullable owning pointer; `None` is the nil pointer.
pub type Ptr<T> = Option<Box<T>>;

/// Whether a type is passed directly or behind a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
	/// A plain value `T`.
	Value,
	/// A nullable pointer [`Ptr<T>`].
	Pointer,
}

/// Element type a conversion can be keyed on.
///
/// `Default` supplies the zero value used when a nil pointer has to be read
/// as a value. Implement it with [`impl_value!`](crate::impl_value), which
/// also provides the matching [`Shape`] impl.
pub trait Value: Default + 'static {}

/// A value in one of the two shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<T> {
	Value(T),
	Pointer(Ptr<T>),
}

impl<T: Value> Slot<T> {
	/// Returns the shape this slot currently holds.
	pub fn kind(&self) -> ShapeKind {
		match self {
			Slot::Value(_) => ShapeKind::Value,
			Slot::Pointer(_) => ShapeKind::Pointer,
		}
	}

	/// Returns true for the nil pointer.
	pub fn is_nil(&self) -> bool {
		matches!(self, Slot::Pointer(None))
	}

	/// Converts this slot into the requested shape.
	///
	/// Values are boxed into a fresh pointer; pointers are dereferenced, with
	/// nil collapsing to the zero value.
	pub fn reshape(self, kind: ShapeKind) -> Self {
		match (self, kind) {
			(Slot::Value(v), ShapeKind::Pointer) => Slot::Pointer(Some(Box::new(v))),
			(Slot::Pointer(p), ShapeKind::Value) => Slot::Value(p.map(|b| *b).unwrap_or_default()),
			(slot, _) => slot,
		}
	}

	pub fn into_value(self) -> T {
		match self {
			Slot::Value(v) => v,
			Slot::Pointer(p) => p.map(|b| *b).unwrap_or_default(),
		}
	}

	pub fn into_pointer(self) -> Ptr<T> {
		match self {
			Slot::Value(v) => Some(Box::new(v)),
			Slot::Pointer(p) => p,
		}
	}
}

/// A caller-facing type: a value or a pointer to some [`Value`].
pub trait Shape: Sized + 'static {
	/// The dereferenced element type used for registry keys.
	type Elem: Value;

	/// Shape of `Self`.
	const KIND: ShapeKind;

	fn into_slot(self) -> Slot<Self::Elem>;

	/// Builds `Self` from a slot of either shape.
	fn from_slot(slot: Slot<Self::Elem>) -> Self;

	/// The nil pointer, or the zero value for value shapes.
	fn nil() -> Self {
		Self::from_slot(Slot::Pointer(None))
	}
}

impl<T: Value> Shape for Ptr<T> {
	type Elem = T;
	const KIND: ShapeKind = ShapeKind::Pointer;

	#[inline]
	fn into_slot(self) -> Slot<T> {
		Slot::Pointer(self)
	}

	#[inline]
	fn from_slot(slot: Slot<T>) -> Self {
		slot.into_pointer()
	}
}

/// Marks concrete types as conversion elements.
///
/// Generates [`Value`] and a value-shaped [`Shape`] impl for each type; the
/// pointer form [`Ptr<T>`] is then covered automatically.
///
/// ```
/// #[derive(Default)]
/// struct Person {
/// 	name: String,
/// }
///
/// morph_registry::impl_value!(Person);
/// ```
#[macro_export]
macro_rules! impl_value {
	($($ty:ty),* $(,)?) => {
		$(
			impl $crate::Value for $ty {}

			impl $crate::Shape for $ty {
				type Elem = $ty;
				const KIND: $crate::ShapeKind = $crate::ShapeKind::Value;

				#[inline]
				fn into_slot(self) -> $crate::Slot<Self> {
					$crate::Slot::Value(self)
				}

				#[inline]
				fn from_slot(slot: $crate::Slot<Self>) -> Self {
					slot.into_value()
				}
			}
		)*
	};
}

impl_value!(
	(),
	bool,
	char,
	i8,
	i16,
	i32,
	i64,
	i128,
	isize,
	u8,
	u16,
	u32,
	u64,
	u128,
	usize,
	f32,
	f64,
	String,
);

impl<T: 'static> Value for Vec<T> {}

impl<T: 'static> Shape for Vec<T> {
	type Elem = Vec<T>;
	const KIND: ShapeKind = ShapeKind::Value;

	fn into_slot(self) -> Slot<Self> {
		Slot::Value(self)
	}

	fn from_slot(slot: Slot<Self>) -> Self {
		slot.into_value()
	}
}

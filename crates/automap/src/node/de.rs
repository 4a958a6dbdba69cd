use serde::de::value::{MapDeserializer, SeqDeserializer};
use serde::de::{self, DeserializeSeed, IntoDeserializer, Visitor};
use serde::forward_to_deserialize_any;

use super::{Node, NodeError};

impl<'de> de::Deserializer<'de> for Node {
	type Error = NodeError;

	fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, NodeError> {
		match self {
			Node::Null => visitor.visit_unit(),
			Node::Bool(v) => visitor.visit_bool(v),
			Node::I64(v) => visitor.visit_i64(v),
			Node::U64(v) => visitor.visit_u64(v),
			Node::I128(v) => match i64::try_from(v) {
				Ok(v) => visitor.visit_i64(v),
				Err(_) => visitor.visit_i128(v),
			},
			Node::U128(v) => match u64::try_from(v) {
				Ok(v) => visitor.visit_u64(v),
				Err(_) => visitor.visit_u128(v),
			},
			Node::F64(v) => visitor.visit_f64(v),
			Node::Char(v) => visitor.visit_char(v),
			Node::Str(v) => visitor.visit_string(v),
			Node::Bytes(v) => visitor.visit_byte_buf(v),
			Node::Seq(items) => {
				let mut seq = SeqDeserializer::<_, NodeError>::new(items.into_iter());
				let value = visitor.visit_seq(&mut seq)?;
				seq.end()?;
				Ok(value)
			}
			Node::Map(entries) => {
				let mut map = MapDeserializer::<_, NodeError>::new(entries.into_iter());
				let value = visitor.visit_map(&mut map)?;
				map.end()?;
				Ok(value)
			}
		}
	}

	fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, NodeError> {
		match self {
			Node::Null => visitor.visit_none(),
			node => visitor.visit_some(node),
		}
	}

	fn deserialize_newtype_struct<V: Visitor<'de>>(
		self,
		_name: &'static str,
		visitor: V,
	) -> Result<V::Value, NodeError> {
		visitor.visit_newtype_struct(self)
	}

	fn deserialize_enum<V: Visitor<'de>>(
		self,
		_name: &'static str,
		_variants: &'static [&'static str],
		visitor: V,
	) -> Result<V::Value, NodeError> {
		let (variant, payload) = match self {
			tag @ Node::Str(_) => (tag, None),
			Node::Map(mut entries) if entries.len() == 1 => match entries.pop() {
				Some((variant, payload)) => (variant, Some(payload)),
				None => return Err(de::Error::custom("empty enum payload")),
			},
			other => {
				return Err(de::Error::invalid_type(other.unexpected(), &"enum variant"));
			}
		};
		visitor.visit_enum(Variant { variant, payload })
	}

	fn deserialize_ignored_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, NodeError> {
		visitor.visit_unit()
	}

	forward_to_deserialize_any! {
		bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
		bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
		identifier
	}
}

impl<'de> IntoDeserializer<'de, NodeError> for Node {
	type Deserializer = Self;

	fn into_deserializer(self) -> Self {
		self
	}
}

impl Node {
	fn unexpected(&self) -> de::Unexpected<'_> {
		match self {
			Self::Null => de::Unexpected::Unit,
			Self::Bool(v) => de::Unexpected::Bool(*v),
			Self::I64(v) => de::Unexpected::Signed(*v),
			Self::U64(v) => de::Unexpected::Unsigned(*v),
			Self::I128(_) | Self::U128(_) => de::Unexpected::Other("128-bit integer"),
			Self::F64(v) => de::Unexpected::Float(*v),
			Self::Char(v) => de::Unexpected::Char(*v),
			Self::Str(v) => de::Unexpected::Str(v),
			Self::Bytes(v) => de::Unexpected::Bytes(v),
			Self::Seq(_) => de::Unexpected::Seq,
			Self::Map(_) => de::Unexpected::Map,
		}
	}
}

/// Externally tagged enum value: the variant name and its optional payload.
struct Variant {
	variant: Node,
	payload: Option<Node>,
}

impl<'de> de::EnumAccess<'de> for Variant {
	type Error = NodeError;
	type Variant = Payload;

	fn variant_seed<T: DeserializeSeed<'de>>(self, seed: T) -> Result<(T::Value, Payload), NodeError> {
		let tag = seed.deserialize(self.variant)?;
		Ok((tag, Payload(self.payload)))
	}
}

struct Payload(Option<Node>);

impl Payload {
	fn require(self) -> Result<Node, NodeError> {
		self.0
			.ok_or_else(|| de::Error::invalid_type(de::Unexpected::UnitVariant, &"variant with data"))
	}
}

impl<'de> de::VariantAccess<'de> for Payload {
	type Error = NodeError;

	fn unit_variant(self) -> Result<(), NodeError> {
		match self.0 {
			None | Some(Node::Null) => Ok(()),
			Some(other) => Err(de::Error::invalid_type(other.unexpected(), &"unit variant")),
		}
	}

	fn newtype_variant_seed<T: DeserializeSeed<'de>>(self, seed: T) -> Result<T::Value, NodeError> {
		seed.deserialize(self.require()?)
	}

	fn tuple_variant<V: Visitor<'de>>(self, _len: usize, visitor: V) -> Result<V::Value, NodeError> {
		de::Deserializer::deserialize_any(self.require()?, visitor)
	}

	fn struct_variant<V: Visitor<'de>>(
		self,
		_fields: &'static [&'static str],
		visitor: V,
	) -> Result<V::Value, NodeError> {
		de::Deserializer::deserialize_any(self.require()?, visitor)
	}
}

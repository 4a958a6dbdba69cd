use serde::Serialize;
use serde::ser;

use super::{Node, NodeError};

/// Captures `value` as a [`Node`] tree.
pub(crate) fn to_node<T: Serialize + ?Sized>(value: &T) -> Result<Node, NodeError> {
	value.serialize(NodeSerializer)
}

struct NodeSerializer;

impl ser::Serializer for NodeSerializer {
	type Ok = Node;
	type Error = NodeError;

	type SerializeSeq = SeqNode;
	type SerializeTuple = SeqNode;
	type SerializeTupleStruct = SeqNode;
	type SerializeTupleVariant = VariantNode<SeqNode>;
	type SerializeMap = MapNode;
	type SerializeStruct = MapNode;
	type SerializeStructVariant = VariantNode<MapNode>;

	fn serialize_bool(self, v: bool) -> Result<Node, NodeError> {
		Ok(Node::Bool(v))
	}

	fn serialize_i8(self, v: i8) -> Result<Node, NodeError> {
		Ok(Node::I64(v.into()))
	}

	fn serialize_i16(self, v: i16) -> Result<Node, NodeError> {
		Ok(Node::I64(v.into()))
	}

	fn serialize_i32(self, v: i32) -> Result<Node, NodeError> {
		Ok(Node::I64(v.into()))
	}

	fn serialize_i64(self, v: i64) -> Result<Node, NodeError> {
		Ok(Node::I64(v))
	}

	fn serialize_i128(self, v: i128) -> Result<Node, NodeError> {
		Ok(Node::I128(v))
	}

	fn serialize_u8(self, v: u8) -> Result<Node, NodeError> {
		Ok(Node::U64(v.into()))
	}

	fn serialize_u16(self, v: u16) -> Result<Node, NodeError> {
		Ok(Node::U64(v.into()))
	}

	fn serialize_u32(self, v: u32) -> Result<Node, NodeError> {
		Ok(Node::U64(v.into()))
	}

	fn serialize_u64(self, v: u64) -> Result<Node, NodeError> {
		Ok(Node::U64(v))
	}

	fn serialize_u128(self, v: u128) -> Result<Node, NodeError> {
		Ok(Node::U128(v))
	}

	fn serialize_f32(self, v: f32) -> Result<Node, NodeError> {
		Ok(Node::F64(v.into()))
	}

	fn serialize_f64(self, v: f64) -> Result<Node, NodeError> {
		Ok(Node::F64(v))
	}

	fn serialize_char(self, v: char) -> Result<Node, NodeError> {
		Ok(Node::Char(v))
	}

	fn serialize_str(self, v: &str) -> Result<Node, NodeError> {
		Ok(Node::Str(v.to_owned()))
	}

	fn serialize_bytes(self, v: &[u8]) -> Result<Node, NodeError> {
		Ok(Node::Bytes(v.to_vec()))
	}

	fn serialize_none(self) -> Result<Node, NodeError> {
		Ok(Node::Null)
	}

	fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Node, NodeError> {
		value.serialize(self)
	}

	fn serialize_unit(self) -> Result<Node, NodeError> {
		Ok(Node::Null)
	}

	fn serialize_unit_struct(self, _name: &'static str) -> Result<Node, NodeError> {
		Ok(Node::Null)
	}

	fn serialize_unit_variant(
		self,
		_name: &'static str,
		_index: u32,
		variant: &'static str,
	) -> Result<Node, NodeError> {
		Ok(Node::Str(variant.to_owned()))
	}

	fn serialize_newtype_struct<T: Serialize + ?Sized>(
		self,
		_name: &'static str,
		value: &T,
	) -> Result<Node, NodeError> {
		value.serialize(self)
	}

	fn serialize_newtype_variant<T: Serialize + ?Sized>(
		self,
		_name: &'static str,
		_index: u32,
		variant: &'static str,
		value: &T,
	) -> Result<Node, NodeError> {
		Ok(tagged(variant, value.serialize(self)?))
	}

	fn serialize_seq(self, len: Option<usize>) -> Result<SeqNode, NodeError> {
		Ok(SeqNode::with_capacity(len.unwrap_or(0)))
	}

	fn serialize_tuple(self, len: usize) -> Result<SeqNode, NodeError> {
		Ok(SeqNode::with_capacity(len))
	}

	fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SeqNode, NodeError> {
		Ok(SeqNode::with_capacity(len))
	}

	fn serialize_tuple_variant(
		self,
		_name: &'static str,
		_index: u32,
		variant: &'static str,
		len: usize,
	) -> Result<VariantNode<SeqNode>, NodeError> {
		Ok(VariantNode {
			variant,
			inner: SeqNode::with_capacity(len),
		})
	}

	fn serialize_map(self, len: Option<usize>) -> Result<MapNode, NodeError> {
		Ok(MapNode::with_capacity(len.unwrap_or(0)))
	}

	fn serialize_struct(self, _name: &'static str, len: usize) -> Result<MapNode, NodeError> {
		Ok(MapNode::with_capacity(len))
	}

	fn serialize_struct_variant(
		self,
		_name: &'static str,
		_index: u32,
		variant: &'static str,
		len: usize,
	) -> Result<VariantNode<MapNode>, NodeError> {
		Ok(VariantNode {
			variant,
			inner: MapNode::with_capacity(len),
		})
	}
}

/// Externally tagged enum payload: `{ variant: value }`.
fn tagged(variant: &'static str, value: Node) -> Node {
	Node::Map(vec![(Node::Str(variant.to_owned()), value)])
}

/// Sequence elements. Any failing element fails the whole sequence, since
/// dropping one would shift the positions of the rest.
pub(crate) struct SeqNode {
	items: Vec<Node>,
}

impl SeqNode {
	fn with_capacity(len: usize) -> Self {
		Self {
			items: Vec::with_capacity(len),
		}
	}

	fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), NodeError> {
		self.items.push(to_node(value)?);
		Ok(())
	}
}

impl ser::SerializeSeq for SeqNode {
	type Ok = Node;
	type Error = NodeError;

	fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), NodeError> {
		self.push(value)
	}

	fn end(self) -> Result<Node, NodeError> {
		Ok(Node::Seq(self.items))
	}
}

impl ser::SerializeTuple for SeqNode {
	type Ok = Node;
	type Error = NodeError;

	fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), NodeError> {
		self.push(value)
	}

	fn end(self) -> Result<Node, NodeError> {
		Ok(Node::Seq(self.items))
	}
}

impl ser::SerializeTupleStruct for SeqNode {
	type Ok = Node;
	type Error = NodeError;

	fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), NodeError> {
		self.push(value)
	}

	fn end(self) -> Result<Node, NodeError> {
		Ok(Node::Seq(self.items))
	}
}

/// Map entries and struct fields. An entry whose key or value fails to
/// serialize is skipped; the remaining entries are kept.
pub(crate) struct MapNode {
	entries: Vec<(Node, Node)>,
	key: Option<Result<Node, NodeError>>,
}

impl MapNode {
	fn with_capacity(len: usize) -> Self {
		Self {
			entries: Vec::with_capacity(len),
			key: None,
		}
	}

	fn insert(&mut self, key: Result<Node, NodeError>, value: Result<Node, NodeError>) {
		match (key, value) {
			(Ok(key), Ok(value)) => self.entries.push((key, value)),
			(Ok(key), Err(error)) => {
				tracing::trace!(?key, %error, "structural copy skipped unserializable field");
			}
			(Err(error), _) => {
				tracing::trace!(%error, "structural copy skipped unserializable map key");
			}
		}
	}
}

impl ser::SerializeMap for MapNode {
	type Ok = Node;
	type Error = NodeError;

	fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), NodeError> {
		self.key = Some(to_node(key));
		Ok(())
	}

	fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), NodeError> {
		let key = self
			.key
			.take()
			.unwrap_or_else(|| Err(NodeError::msg("map value serialized before its key")));
		self.insert(key, to_node(value));
		Ok(())
	}

	fn end(self) -> Result<Node, NodeError> {
		Ok(Node::Map(self.entries))
	}
}

impl ser::SerializeStruct for MapNode {
	type Ok = Node;
	type Error = NodeError;

	fn serialize_field<T: Serialize + ?Sized>(
		&mut self,
		key: &'static str,
		value: &T,
	) -> Result<(), NodeError> {
		self.insert(Ok(Node::Str(key.to_owned())), to_node(value));
		Ok(())
	}

	fn end(self) -> Result<Node, NodeError> {
		Ok(Node::Map(self.entries))
	}
}

/// Payload of a tuple or struct enum variant, wrapped in its tag on `end`.
pub(crate) struct VariantNode<T> {
	variant: &'static str,
	inner: T,
}

impl ser::SerializeTupleVariant for VariantNode<SeqNode> {
	type Ok = Node;
	type Error = NodeError;

	fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), NodeError> {
		self.inner.push(value)
	}

	fn end(self) -> Result<Node, NodeError> {
		Ok(tagged(self.variant, Node::Seq(self.inner.items)))
	}
}

impl ser::SerializeStructVariant for VariantNode<MapNode> {
	type Ok = Node;
	type Error = NodeError;

	fn serialize_field<T: Serialize + ?Sized>(
		&mut self,
		key: &'static str,
		value: &T,
	) -> Result<(), NodeError> {
		ser::SerializeStruct::serialize_field(&mut self.inner, key, value)
	}

	fn end(self) -> Result<Node, NodeError> {
		Ok(tagged(self.variant, Node::Map(self.inner.entries)))
	}
}

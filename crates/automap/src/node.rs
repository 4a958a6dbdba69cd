//! Self-describing value tree used as the intermediate form of a structural copy.
//!
//! # Role
//!
//! [`to_node`] captures any `Serialize` type; a [`Node`] is itself a
//! `Deserializer`, so the destination is rebuilt straight from the tree.
//!
//! # Invariants
//!
//! - Lossless for every serde primitive, including 128-bit integers,
//!   non-finite floats and non-string map keys.
//! - A struct field or map entry that fails to serialize drops only itself.

mod de;
mod ser;

use std::fmt;

pub(crate) use ser::to_node;

/// One serialized value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
	/// `None`, `()` and unit structs.
	Null,
	Bool(bool),
	I64(i64),
	U64(u64),
	I128(i128),
	U128(u128),
	F64(f64),
	Char(char),
	Str(String),
	Bytes(Vec<u8>),
	/// Sequences, tuples and tuple structs.
	Seq(Vec<Node>),
	/// Maps and structs, in serialization order.
	Map(Vec<(Node, Node)>),
}

/// Coarse classification deciding which source values may replace a target value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
	Null,
	Bool,
	Number,
	Text,
	Bytes,
	Seq,
	Map,
}

impl Node {
	pub(crate) fn kind(&self) -> Kind {
		match self {
			Self::Null => Kind::Null,
			Self::Bool(_) => Kind::Bool,
			Self::I64(_) | Self::U64(_) | Self::I128(_) | Self::U128(_) | Self::F64(_) => Kind::Number,
			Self::Char(_) | Self::Str(_) => Kind::Text,
			Self::Bytes(_) => Kind::Bytes,
			Self::Seq(_) => Kind::Seq,
			Self::Map(_) => Kind::Map,
		}
	}

	/// Value stored under `key` when this node is a map.
	pub(crate) fn get(&self, key: &Node) -> Option<&Node> {
		match self {
			Self::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
			_ => None,
		}
	}
}

/// Failure while building or reading a [`Node`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub(crate) struct NodeError(String);

impl NodeError {
	fn msg(msg: impl fmt::Display) -> Self {
		Self(msg.to_string())
	}
}

impl serde::ser::Error for NodeError {
	fn custom<T: fmt::Display>(msg: T) -> Self {
		Self::msg(msg)
	}
}

impl serde::de::Error for NodeError {
	fn custom<T: fmt::Display>(msg: T) -> Self {
		Self::msg(msg)
	}
}

#[cfg(test)]
mod tests;

//! Best-effort structural copy through a [`Node`] tree.
//!
//! # Role
//!
//! Copies same-named, type-compatible fields from a source into a freshly
//! zeroed destination. Fields without a counterpart stay at their zero value.
//! Nested structs are merged field by field; sequences and maps are copied
//! whole, which gives a deep copy of their contents.
//!
//! # Invariants
//!
//! - Never fails: anything that cannot be carried over is left at zero.
//! - A source field that cannot be captured or read back drops only itself.

use std::mem;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::node::{Node, to_node};

/// Copies matching fields of `src` into `D::default()`.
pub fn copy_fields<S, D>(src: &S) -> D
where
	S: Serialize + ?Sized,
	D: Serialize + DeserializeOwned + Default,
{
	let zero = D::default();
	let (source, target) = match (to_node(src), to_node(&zero)) {
		(Ok(source), Ok(target)) => (source, target),
		(Err(error), _) | (_, Err(error)) => {
			tracing::trace!(%error, "structural copy skipped");
			return zero;
		}
	};

	if let Ok(dst) = D::deserialize(overlay(target.clone(), &source)) {
		return dst;
	}
	field_by_field(target, &source).unwrap_or(zero)
}

/// Overlays `source` onto `target`, keeping `target`'s structure.
fn overlay(target: Node, source: &Node) -> Node {
	match (target, source) {
		(Node::Map(t), Node::Map(s)) if t.is_empty() => Node::Map(s.clone()),
		(Node::Map(mut t), s @ Node::Map(_)) => {
			for (key, slot) in t.iter_mut() {
				if let Some(value) = s.get(key) {
					let current = mem::replace(slot, Node::Null);
					*slot = overlay(current, value);
				}
			}
			Node::Map(t)
		}
		(Node::Null, s) => s.clone(),
		(t, s) if t.kind() == s.kind() => s.clone(),
		(t, _) => t,
	}
}

/// Retries the overlay one top-level field at a time, keeping only fields that
/// leave the destination deserializable.
fn field_by_field<D: DeserializeOwned>(target: Node, source: &Node) -> Option<D> {
	let Node::Map(mut accepted) = target else {
		return None;
	};

	for i in 0..accepted.len() {
		let Some(value) = source.get(&accepted[i].0) else {
			continue;
		};
		let current = accepted[i].1.clone();
		let candidate = overlay(current.clone(), value);
		if candidate == current {
			continue;
		}
		accepted[i].1 = candidate;
		if D::deserialize(Node::Map(accepted.clone())).is_err() {
			tracing::trace!(field = ?accepted[i].0, "structural copy dropped incompatible field");
			accepted[i].1 = current;
		}
	}
	D::deserialize(Node::Map(accepted)).ok()
}

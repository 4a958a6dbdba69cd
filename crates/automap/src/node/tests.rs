use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};

use super::{Kind, Node, to_node};

fn rebuild<T: DeserializeOwned>(node: Node) -> T {
	match T::deserialize(node) {
		Ok(value) => value,
		Err(error) => panic!("node did not deserialize: {error}"),
	}
}

fn capture<T: Serialize + ?Sized>(value: &T) -> Node {
	match to_node(value) {
		Ok(node) => node,
		Err(error) => panic!("value did not serialize: {error}"),
	}
}

/// Always fails to serialize.
#[derive(Debug, Default, PartialEq, Deserialize)]
struct Refuses;

impl Serialize for Refuses {
	fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
		Err(serde::ser::Error::custom("refused"))
	}
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Mixed {
	name: String,
	broken: Refuses,
	count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Shape {
	Empty,
	Circle(f64),
	Pair(i8, i8),
	Rect { w: u16, h: u16 },
}

#[test]
fn test_wide_integers_are_kept_exact() {
	assert_eq!(capture(&u128::MAX), Node::U128(u128::MAX));
	assert_eq!(rebuild::<u128>(capture(&u128::MAX)), u128::MAX);
	assert_eq!(rebuild::<i128>(capture(&i128::MIN)), i128::MIN);
	assert_eq!(rebuild::<u8>(capture(&7u128)), 7);
}

#[test]
fn test_non_finite_floats_survive() {
	assert_eq!(rebuild::<f64>(capture(&f64::INFINITY)), f64::INFINITY);
	assert_eq!(rebuild::<f32>(capture(&f32::NEG_INFINITY)), f32::NEG_INFINITY);
	assert!(rebuild::<f64>(capture(&f64::NAN)).is_nan());
}

#[test]
fn test_non_string_map_keys() {
	let grid = BTreeMap::from([((0u8, 1u8), 2u8), ((3, 4), 5)]);
	assert_eq!(rebuild::<BTreeMap<(u8, u8), u8>>(capture(&grid)), grid);
}

#[test]
fn test_failing_field_drops_only_itself() {
	let node = capture(&Mixed {
		name: "kept".into(),
		broken: Refuses,
		count: 9,
	});
	assert_eq!(
		node,
		Node::Map(vec![
			(Node::Str("name".into()), Node::Str("kept".into())),
			(Node::Str("count".into()), Node::U64(9)),
		])
	);
}

#[test]
fn test_failing_element_fails_the_sequence() {
	assert!(to_node(&vec![Refuses, Refuses]).is_err());
}

#[test]
fn test_enum_variants() {
	for shape in [
		Shape::Empty,
		Shape::Circle(1.5),
		Shape::Pair(-1, 2),
		Shape::Rect { w: 3, h: 4 },
	] {
		assert_eq!(rebuild::<Shape>(capture(&shape)), shape);
	}
	assert_eq!(capture(&Shape::Empty), Node::Str("Empty".into()));
}

#[test]
fn test_options_and_units() {
	assert_eq!(capture(&None::<u8>), Node::Null);
	assert_eq!(rebuild::<Option<String>>(Node::Str("x".into())), Some("x".to_string()));
	assert_eq!(rebuild::<Option<String>>(Node::Null), None);
	rebuild::<()>(Node::Null);
}

#[test]
fn test_numbers_share_a_kind() {
	for node in [
		Node::I64(-1),
		Node::U64(1),
		Node::I128(-1),
		Node::U128(1),
		Node::F64(0.5),
	] {
		assert_eq!(node.kind(), Kind::Number);
	}
	assert_eq!(Node::Char('c').kind(), Node::Str("s".into()).kind());
}

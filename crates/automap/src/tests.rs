use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};

use super::copy_fields;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Address {
	city: String,
	zip: u32,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Customer {
	name: String,
	age: u8,
	address: Address,
	tags: Vec<String>,
	notes: BTreeMap<String, String>,
	nickname: Option<String>,
	internal: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct CustomerView {
	name: String,
	age: u8,
	address: AddressView,
	tags: Vec<String>,
	notes: BTreeMap<String, String>,
	nickname: Option<String>,
	score: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct AddressView {
	city: String,
	country: String,
}

fn customer() -> Customer {
	Customer {
		name: "Ada".into(),
		age: 36,
		address: Address {
			city: "London".into(),
			zip: 1815,
		},
		tags: vec!["vip".into()],
		notes: BTreeMap::from([("k".to_string(), "v".to_string())]),
		nickname: Some("countess".into()),
		internal: true,
	}
}

#[test]
fn test_matching_fields_are_copied() {
	let view: CustomerView = copy_fields(&customer());
	assert_eq!(
		view,
		CustomerView {
			name: "Ada".into(),
			age: 36,
			address: AddressView {
				city: "London".into(),
				country: String::new(),
			},
			tags: vec!["vip".into()],
			notes: BTreeMap::from([("k".to_string(), "v".to_string())]),
			nickname: Some("countess".into()),
			score: 0,
		}
	);
}

#[test]
fn test_unmatched_fields_stay_zero() {
	let back: Customer = copy_fields(&copy_fields::<_, CustomerView>(&customer()));
	assert!(!back.internal);
	assert_eq!(back.address.zip, 0);
	assert_eq!(back.name, "Ada");
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Narrow {
	name: String,
	age: u8,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Wide {
	name: String,
	age: u32,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Mistyped {
	name: u32,
	age: String,
}

#[test]
fn test_incompatible_fields_are_dropped() {
	let narrow: Narrow = copy_fields(&Wide {
		name: "big".into(),
		age: 1_000,
	});
	assert_eq!(
		narrow,
		Narrow {
			name: "big".into(),
			age: 0,
		}
	);

	let mistyped: Mistyped = copy_fields(&Narrow {
		name: "n".into(),
		age: 3,
	});
	assert_eq!(mistyped, Mistyped::default());
}

#[test]
fn test_scalar_copy() {
	let copied: String = copy_fields("text");
	assert_eq!(copied, "text");

	let zero: u8 = copy_fields(&String::from("not a number"));
	assert_eq!(zero, 0);
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Ledger {
	name: String,
	balance: u128,
	debt: i128,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct LedgerView {
	name: String,
	balance: u128,
	debt: i128,
}

#[test]
fn test_wide_integers_are_copied() {
	let view: LedgerView = copy_fields(&Ledger {
		name: "vault".into(),
		balance: u128::MAX,
		debt: i128::MIN,
	});
	assert_eq!(
		view,
		LedgerView {
			name: "vault".into(),
			balance: u128::MAX,
			debt: i128::MIN,
		}
	);
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Grid {
	name: String,
	cells: BTreeMap<(u8, u8), u8>,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct GridLabel {
	name: String,
}

#[test]
fn test_tuple_keyed_map_field() {
	let grid = Grid {
		name: "board".into(),
		cells: BTreeMap::from([((0, 0), 1), ((2, 3), 4)]),
	};

	let label: GridLabel = copy_fields(&grid);
	assert_eq!(label.name, "board");

	let copy: Grid = copy_fields(&grid);
	assert_eq!(copy, grid);
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Reading {
	name: String,
	value: f64,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct ReadingView {
	name: String,
	value: f64,
}

#[test]
fn test_non_finite_floats_are_copied() {
	let view: ReadingView = copy_fields(&Reading {
		name: "overflow".into(),
		value: f64::INFINITY,
	});
	assert_eq!(view.name, "overflow");
	assert_eq!(view.value, f64::INFINITY);

	let nan: ReadingView = copy_fields(&Reading {
		name: "nan".into(),
		value: f64::NAN,
	});
	assert_eq!(nan.name, "nan");
	assert!(nan.value.is_nan());
}

/// Serialization always fails.
#[derive(Debug, Default, PartialEq, Deserialize)]
struct Sealed;

impl Serialize for Sealed {
	fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
		Err(serde::ser::Error::custom("sealed"))
	}
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Envelope {
	name: String,
	secret: Sealed,
	size: u32,
}

#[test]
fn test_unserializable_field_drops_only_itself() {
	let view: Narrow = copy_fields(&Envelope {
		name: "letter".into(),
		secret: Sealed,
		size: 4,
	});
	assert_eq!(
		view,
		Narrow {
			name: "letter".into(),
			age: 0,
		}
	);
}

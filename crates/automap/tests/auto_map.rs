//! Bidirectional structural registration through the registry.

use morph_automap::AutoMap;
use morph_registry::{Ptr, Registry, SharedRegistry};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use {thiserror as _, tracing as _};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct User {
	id: u64,
	name: String,
	email: String,
	roles: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct UserDto {
	id: u64,
	name: String,
	email: String,
	roles: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct UserSummary {
	id: u64,
	name: String,
	active: bool,
}

morph_registry::impl_value!(User, UserDto, UserSummary);

fn user() -> User {
	User {
		id: 7,
		name: "ann".into(),
		email: "ann@example.com".into(),
		roles: vec!["admin".into(), "dev".into()],
	}
}

#[test]
fn registers_both_directions() {
	let mut registry = Registry::new();
	registry.register_auto_map::<User, UserDto>();

	assert!(registry.has::<User, UserDto>());
	assert!(registry.has::<UserDto, User>());
	assert_eq!(registry.len(), 2);
}

#[test]
fn round_trip_restores_identical_struct() {
	let mut registry = Registry::new();
	registry.register_auto_map::<User, UserDto>();

	let dto: UserDto = registry.map(user()).unwrap();
	let back: User = registry.map(dto).unwrap();
	assert_eq!(back, user());
}

#[test]
fn missing_counterparts_land_at_zero() {
	let mut registry = Registry::new();
	registry.register_auto_map::<User, UserSummary>();

	let summary: UserSummary = registry.map(user()).unwrap();
	assert_eq!(
		summary,
		UserSummary {
			id: 7,
			name: "ann".into(),
			active: false,
		}
	);

	let back: User = registry.map(summary).unwrap();
	assert_eq!(
		back,
		User {
			id: 7,
			name: "ann".into(),
			..User::default()
		}
	);
}

#[test]
fn participates_in_pointer_and_slice_dispatch() {
	let mut registry = Registry::new();
	registry.register_auto_map::<User, UserDto>();

	let dto: Ptr<UserDto> = registry.map(Some(Box::new(user()))).unwrap();
	assert_eq!(dto.map(|d| d.id), Some(7));

	let nil: UserDto = registry.map(None::<Box<User>>).unwrap();
	assert_eq!(nil, UserDto::default());

	let many: Vec<Ptr<UserDto>> = registry
		.map_slice(vec![Some(Box::new(user())), None])
		.unwrap();
	assert_eq!(many.len(), 2);
	assert_eq!(many[0].as_ref().map(|d| d.name.as_str()), Some("ann"));
	assert!(many[1].is_none());
}

#[test]
fn same_type_pair_moves_value() {
	let mut registry = Registry::new();
	registry.register_auto_map::<User, User>();

	assert_eq!(registry.len(), 1);
	assert_eq!(registry.map::<User, User>(user()), Ok(user()));
}

#[test]
fn auto_map_overwrites_manual_registration() {
	let mut registry = Registry::new();
	registry.register(|u: User| UserDto {
		name: u.name.to_uppercase(),
		..UserDto::default()
	});
	registry.register_auto_map::<User, UserDto>();

	let dto: UserDto = registry.map(user()).unwrap();
	assert_eq!(dto.name, "ann");
}

#[test]
fn shared_registry_publishes_both_directions() {
	let shared = SharedRegistry::new();
	shared.register_auto_map::<User, UserDto>();

	let dto: UserDto = shared.map(user()).unwrap();
	assert_eq!(shared.map::<_, User>(dto), Ok(user()));
}

fn arb_user() -> impl Strategy<Value = User> {
	(
		any::<u64>(),
		".{0,16}",
		"[a-z]{1,8}@[a-z]{1,8}\\.com",
		prop::collection::vec("[a-z]{0,6}", 0..4),
	)
		.prop_map(|(id, name, email, roles)| User {
			id,
			name,
			email,
			roles,
		})
}

proptest! {
	/// Structurally identical types round-trip exactly.
	#[test]
	fn prop_round_trip(u in arb_user()) {
		let mut registry = Registry::new();
		registry.register_auto_map::<User, UserDto>();

		let dto: UserDto = registry.map(u.clone()).unwrap();
		let back: User = registry.map(dto).unwrap();
		prop_assert_eq!(back, u);
	}

	/// Fields without a counterpart come back as zero after a round trip.
	#[test]
	fn prop_lossy_round_trip(u in arb_user()) {
		let mut registry = Registry::new();
		registry.register_auto_map::<User, UserSummary>();

		let summary: UserSummary = registry.map(u.clone()).unwrap();
		let back: User = registry.map(summary).unwrap();
		prop_assert_eq!(back.id, u.id);
		prop_assert_eq!(back.name, u.name);
		prop_assert!(back.email.is_empty());
		prop_assert!(back.roles.is_empty());
	}
}

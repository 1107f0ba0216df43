//! Integration tests for commands
//!
//! Tests command construction defaults and field preservation.

use wayfarer_foundation::{EntityId, ItemId, VerbId};
use wayfarer_world::{Command, Direction};

#[test]
fn verb_only_command() {
    let cmd = Command::new("inventory", "i");
    assert_eq!(cmd.verb(), &VerbId::new("inventory"));
    assert_eq!(cmd.raw_input(), "i");
    assert!(cmd.direct_object().is_none());
    assert!(cmd.indirect_object().is_none());
    assert!(cmd.direct_object_modifiers().is_empty());
    assert!(cmd.indirect_object_modifiers().is_empty());
    assert!(cmd.preposition().is_none());
}

#[test]
fn full_command_preserves_fields() {
    let cmd = Command::new("unlock", "unlock the heavy oak door with the small key")
        .with_direct_object(ItemId::new("door"), ["heavy", "oak"])
        .with_indirect_object(ItemId::new("key"), ["small"])
        .with_preposition("with");

    assert_eq!(cmd.direct_object(), Some(&EntityId::item("door")));
    assert_eq!(cmd.direct_object_modifiers(), ["heavy", "oak"]);
    assert_eq!(cmd.indirect_object(), Some(&EntityId::item("key")));
    assert_eq!(cmd.indirect_object_modifiers(), ["small"]);
    assert_eq!(cmd.preposition(), Some("with"));
}

#[test]
fn object_without_modifiers() {
    let cmd = Command::new("take", "take lamp")
        .with_direct_object(ItemId::new("lamp"), Vec::<String>::new());
    assert_eq!(cmd.direct_object(), Some(&EntityId::item("lamp")));
    assert!(cmd.direct_object_modifiers().is_empty());
}

#[test]
fn non_item_objects_are_allowed() {
    let cmd = Command::new("examine", "examine me")
        .with_direct_object(EntityId::Player, std::iter::empty::<&str>());
    assert_eq!(cmd.direct_object(), Some(&EntityId::Player));
}

#[test]
fn equality_is_structural() {
    let build = || Command::new("go", "go north").with_direction(Direction::North);
    assert_eq!(build(), build());
    assert_ne!(build(), Command::new("go", "go north"));
    assert_ne!(build(), Command::new("go", "n").with_direction(Direction::North));
}

#[test]
fn command_round_trips_through_messagepack() {
    let cmd = Command::new("put", "put coin in slot")
        .with_direct_object(ItemId::new("coin"), ["gold"])
        .with_indirect_object(ItemId::new("slot"), Vec::<String>::new())
        .with_preposition("in");
    let bytes = rmp_serde::to_vec(&cmd).unwrap();
    let decoded: Command = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(decoded, cmd);
}

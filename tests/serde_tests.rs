#![cfg(feature = "serde")]

//! Integration tests for serde support on List.
//!
//! A list serializes as a plain sequence of its current elements and
//! deserializes into a list with its own buffer.

use enumerable::prelude::*;
use rstest::rstest;

#[rstest]
fn test_list_serializes_as_json_array() {
    let list = List::from(vec![1, 2, 3]);
    assert_eq!(serde_json::to_string(&list).unwrap(), "[1,2,3]");
}

#[rstest]
fn test_empty_list_round_trip() {
    let list: List<String> = List::new();
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[]");

    let restored: List<String> = serde_json::from_str(&json).unwrap();
    assert!(restored.is_empty());
}

#[rstest]
fn test_list_round_trip() {
    let list = List::from(vec![String::from("north"), String::from("south")]);
    let json = serde_json::to_string(&list).unwrap();
    let restored: List<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, list);
}

#[rstest]
fn test_serialization_reflects_current_contents() {
    let list = List::from(vec![1]);
    list.push(2);
    list.push_front(0);
    assert_eq!(serde_json::to_string(&list).unwrap(), "[0,1,2]");
}

#[rstest]
fn test_nested_lists() {
    let outer = List::from(vec![List::from(vec![1, 2]), List::new(), List::from(vec![3])]);
    let json = serde_json::to_string(&outer).unwrap();
    assert_eq!(json, "[[1,2],[],[3]]");

    let restored: List<List<i32>> = serde_json::from_str(&json).unwrap();
    let flattened = restored.select_many(|inner| inner.to_vec()).to_vec();
    assert_eq!(flattened, vec![1, 2, 3]);
}

#[rstest]
fn test_deserialized_list_is_queryable_and_mutable() {
    let restored: List<i32> = serde_json::from_str("[4, 8, 15, 16]").unwrap();
    restored.push(23);
    assert_eq!(restored.filter(|value| value % 2 == 1).to_vec(), vec![15, 23]);
}

#[rstest]
fn test_invalid_json_is_rejected() {
    let result: Result<List<i32>, _> = serde_json::from_str("{\"a\": 1}");
    assert!(result.is_err());
}

//! Integration tests for Stockroom

use stockroom::{Config, Index, ParseRecordError, Record, StockError};

// =============================================================================
// Reference Scenario
// =============================================================================

#[test]
fn test_reference_scenario() {
    let mut index = Index::new();

    index.add(Record::new("ITEM001", "LED Light", "Aisle 3, Shelf 1")).unwrap();
    index.add(Record::new("ITEM002", "Fan Motor", "Aisle 2, Shelf 5")).unwrap();

    let dup = index.add(Record::new("ITEM001", "LED Light", "Aisle 3, Shelf 1"));
    assert!(matches!(dup, Err(StockError::DuplicateKey(ref id)) if id == "ITEM001"));

    let found = index.find_by_id("ITEM002").unwrap();
    assert_eq!(found.description(), "Fan Motor");
    assert_eq!(found.location(), "Aisle 2, Shelf 5");

    assert!(matches!(index.remove("ITEM003"), Err(StockError::ItemNotFound { .. })));
    assert!(matches!(index.find_by_id("ITEM003"), Err(StockError::ItemNotFound { .. })));

    let lines: Vec<String> = index.list_by_description().map(|r| r.to_string()).collect();
    assert_eq!(
        lines,
        vec!["- Fan Motor: Aisle 2, Shelf 5", "- LED Light: Aisle 3, Shelf 1"]
    );
}

// =============================================================================
// Record
// =============================================================================

#[test]
fn test_record_accessors_and_display() {
    let record = Record::new("ITEM009", "Relay", "Aisle 5, Shelf 3");
    assert_eq!(record.id(), "ITEM009");
    assert_eq!(record.description(), "Relay");
    assert_eq!(record.location(), "Aisle 5, Shelf 3");
    assert_eq!(record.to_string(), "- Relay: Aisle 5, Shelf 3");
}

#[test]
fn test_record_parse() {
    let record: Record = "ITEM004=Cable Tie@Aisle 4, Shelf 2".parse().unwrap();
    assert_eq!(record, Record::new("ITEM004", "Cable Tie", "Aisle 4, Shelf 2"));
}

#[test]
fn test_record_parse_location_keeps_separators() {
    let record: Record = "A=Fuse@Bin@2=top".parse().unwrap();
    assert_eq!(record.id(), "A");
    assert_eq!(record.description(), "Fuse");
    assert_eq!(record.location(), "Bin@2=top");
}

#[test]
fn test_record_parse_missing_id() {
    let err = "bad".parse::<Record>().unwrap_err();
    assert_eq!(err, ParseRecordError::MissingId("bad".to_string()));
    assert_eq!(err.to_string(), "expected ID=DESCRIPTION@LOCATION, got `bad`");
}

#[test]
fn test_record_parse_missing_location() {
    let err = "A=Fuse".parse::<Record>().unwrap_err();
    assert_eq!(err, ParseRecordError::MissingLocation("A=Fuse".to_string()));
}

#[test]
fn test_record_parse_empty_fields() {
    let record: Record = "=@".parse().unwrap();
    assert_eq!(record, Record::new("", "", ""));
}

// =============================================================================
// Extra Items
// =============================================================================

#[test]
fn test_add_all_duplicate_is_not_fatal() {
    let mut index = Index::new();
    let items: Vec<Record> = ["A=Fuse@Bin 1", "A=Other@x", "B=Anchor@Bin 2"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();

    let errors = index.add_all(items);

    assert_eq!(errors, vec![StockError::DuplicateKey("A".to_string())]);
    let lines: Vec<String> = index.list_by_description().map(|r| r.to_string()).collect();
    assert_eq!(lines, vec!["- Anchor: Bin 2", "- Fuse: Bin 1"]);
}

#[test]
fn test_add_all_clean_returns_no_errors() {
    let mut index = Index::new();
    let errors = index.add_all(vec![
        Record::new("A", "Fuse", "Bin 1"),
        Record::new("B", "Fuse", "Bin 2"),
    ]);

    assert!(errors.is_empty());
    assert_eq!(index.len(), 2);
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn test_config_builder() {
    let config = Config::builder()
        .initial_capacity(16)
        .log_filter("warn")
        .build();
    assert_eq!(config.initial_capacity, 16);
    assert_eq!(config.log_filter, "warn");

    let default = Config::default();
    assert_eq!(default.initial_capacity, 0);
    assert_eq!(default.log_filter, "info,stockroom=debug");
}

use crate::Gender;

use std::str::FromStr;

#[test]
fn test_gender_as_str() {
    assert_eq!(Gender::Male.as_str(), "זכר");
    assert_eq!(Gender::Female.as_str(), "נקבה");
}

#[test]
fn test_gender_from_str() {
    assert_eq!(Gender::from_str("זכר").unwrap(), Gender::Male);
    assert_eq!(Gender::from_str("נקבה").unwrap(), Gender::Female);
    assert!(Gender::from_str("male").is_err());
}

#[test]
fn test_gender_serializes_to_wire_label() {
    let json = serde_json::to_string(&Gender::Female).unwrap();
    assert_eq!(json, "\"נקבה\"");
}

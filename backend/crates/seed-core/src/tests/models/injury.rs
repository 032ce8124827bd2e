use crate::Injury;

use std::str::FromStr;

#[test]
fn test_injury_from_str() {
    assert_eq!(Injury::from_str("ברך").unwrap(), Injury::Knee);
    assert_eq!(Injury::from_str("קרסול").unwrap(), Injury::Ankle);
    assert!(Injury::from_str("wrist").is_err());
}

#[test]
fn test_injury_display_is_wire_label() {
    assert_eq!(Injury::Shoulder.to_string(), "כתף");
}

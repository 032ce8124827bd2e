use crate::Equipment;

use std::str::FromStr;

#[test]
fn test_equipment_as_str() {
    assert_eq!(Equipment::Dumbbells.as_str(), "משקולות");
    assert_eq!(Equipment::Barbells.as_str(), "מוטות");
    assert_eq!(Equipment::Machines.as_str(), "מכשירים");
    assert_eq!(Equipment::ResistanceBands.as_str(), "גומיות התנגדות");
}

#[test]
fn test_equipment_from_str() {
    assert_eq!(
        Equipment::from_str("גומיות התנגדות").unwrap(),
        Equipment::ResistanceBands
    );
    assert!(Equipment::from_str("kettlebell").is_err());
}

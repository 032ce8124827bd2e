use crate::{Equipment, FitnessGoal, Gender, Injury, Profile};

use serde_json::json;

fn sample_profile() -> Profile {
    Profile {
        name: "Emma Clark".to_string(),
        email: "demo4@gymovo.com".to_string(),
        age: 31,
        gender: Gender::Female,
        height_cm: 168,
        weight_kg: 61,
        goal: FitnessGoal::Rehabilitation,
        equipment: vec![Equipment::Dumbbells, Equipment::Barbells],
        injuries: vec![Injury::Back, Injury::Knee],
    }
}

#[test]
fn test_profile_serializes_to_users_row() {
    let value = serde_json::to_value(sample_profile()).unwrap();

    assert_eq!(
        value,
        json!({
            "name": "Emma Clark",
            "email": "demo4@gymovo.com",
            "age": 31,
            "gender": "נקבה",
            "height_cm": 168,
            "weight_kg": 61,
            "goal": "שיקום",
            "equipment": ["משקולות", "מוטות"],
            "injuries": ["גב", "ברך"]
        })
    );
}

#[test]
fn test_profile_empty_injuries_serialize_as_empty_array() {
    let mut profile = sample_profile();
    profile.injuries.clear();

    let value = serde_json::to_value(profile).unwrap();
    assert_eq!(value["injuries"], json!([]));
}

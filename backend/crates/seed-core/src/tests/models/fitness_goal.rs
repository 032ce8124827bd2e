use crate::FitnessGoal;
use crate::pools::GOALS;

use std::str::FromStr;

#[test]
fn test_fitness_goal_from_str_matches_as_str() {
    for goal in GOALS {
        assert_eq!(FitnessGoal::from_str(goal.as_str()).unwrap(), *goal);
    }
}

#[test]
fn test_fitness_goal_from_str_invalid() {
    let err = FitnessGoal::from_str("bulking").unwrap_err();
    assert!(err.to_string().contains("bulking"));
}

#[test]
fn test_fitness_goal_serde_uses_wire_label() {
    assert_eq!(
        serde_json::to_value(FitnessGoal::MassGain).unwrap(),
        "עלייה במסה"
    );
    let goal: FitnessGoal = serde_json::from_str("\"כושר כללי\"").unwrap();
    assert_eq!(goal, FitnessGoal::GeneralFitness);
}

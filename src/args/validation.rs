use std::collections::HashSet;
use std::{fs, path::PathBuf};

use super::types::PicksFile;
use crate::error::PoolError;
use crate::model::ParticipantAssignment;

pub const BUNDLED_PICKS: &str = include_str!("../../data/masters_2025.json");

/// # Errors
///
/// Will return `Err` if the file is not readable or does not hold a valid picks list
pub fn check_readable_picks_file(file: &str) -> Result<PicksFile, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The picks file '{file}' is not readable."));
    }
    let contents =
        fs::read_to_string(&path).map_err(|e| format!("The picks file '{file}': {e}"))?;
    parse_picks_json(&contents)
        .map(PicksFile)
        .map_err(|e| format!("The picks file '{file}' is not in the correct format: {e}"))
}

/// Parse and validate a picks list.
/// The format we expect is:
/// `[{ "person": "Alex", "golfers": ["S. Scheffler", "W. Clark", "T. Detry", "K. Yu"] }, ...]`
///
/// # Errors
///
/// Will return `Err` if the json does not decode, a golfer list is not exactly
/// four names, a name is blank, or a person appears twice
pub fn parse_picks_json(json: &str) -> Result<Vec<ParticipantAssignment>, PoolError> {
    let picks: Vec<ParticipantAssignment> =
        serde_json::from_str(json).map_err(|e| PoolError::Config(e.to_string()))?;

    if picks.is_empty() {
        return Err(PoolError::Config("no participants listed".into()));
    }

    let mut seen = HashSet::new();
    for pick in &picks {
        if pick.person.trim().is_empty() {
            return Err(PoolError::Config("participant with an empty name".into()));
        }
        if !seen.insert(pick.person.as_str()) {
            return Err(PoolError::Config(format!(
                "participant {} is listed twice",
                pick.person
            )));
        }
        if pick.golfers.iter().any(|g| g.trim().is_empty()) {
            return Err(PoolError::Config(format!(
                "participant {} has a blank golfer",
                pick.person
            )));
        }
    }
    Ok(picks)
}

/// The pool compiled into the binary.
///
/// # Errors
///
/// Will return `Err` if the bundled file is malformed
pub fn bundled_participants() -> Result<Vec<ParticipantAssignment>, PoolError> {
    parse_picks_json(BUNDLED_PICKS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_pool_is_valid() {
        let picks = bundled_participants().unwrap();
        assert_eq!(picks.len(), 20);
        assert_eq!(picks[0].person, "Alex");
        assert_eq!(
            picks[0].golfers,
            ["S. Scheffler", "W. Clark", "T. Detry", "K. Yu"].map(String::from)
        );
    }

    #[test]
    fn golfer_lists_must_hold_four() {
        let three = r#"[{"person": "Ed", "golfers": ["A", "B", "C"]}]"#;
        let five = r#"[{"person": "Ed", "golfers": ["A", "B", "C", "D", "E"]}]"#;
        assert!(matches!(parse_picks_json(three), Err(PoolError::Config(_))));
        assert!(matches!(parse_picks_json(five), Err(PoolError::Config(_))));
    }

    #[test]
    fn rejects_duplicates_and_blanks() {
        let dup = r#"[{"person": "Ed", "golfers": ["A", "B", "C", "D"]},
                      {"person": "Ed", "golfers": ["E", "F", "G", "H"]}]"#;
        let blank = r#"[{"person": "Ed", "golfers": ["A", " ", "C", "D"]}]"#;
        assert!(parse_picks_json(dup).is_err());
        assert!(parse_picks_json(blank).is_err());
        assert!(parse_picks_json("[]").is_err());
    }

    #[test]
    fn unreadable_file_is_reported() {
        let err = check_readable_picks_file("/definitely/not/here.json").unwrap_err();
        assert!(err.contains("not readable"));
    }
}

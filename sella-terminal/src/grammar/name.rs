//! Name insert: -[Last Name]/[First Name][Space][Name Title].

use sella_session::{PassengerName, SessionRecord};

use crate::result::{CommandError, CommandPayload, NameInsertPayload};

const FORMAT_HINT: &str =
    "Format: -[Last Name]/[First Name][Space][Name Title]. Example: -HOSSEN/TUSHAR MR";

const TITLES: [&str; 3] = ["MR", "MRS", "MS"];

/// Validates and applies a name insert. A repeated insert overwrites the
/// previous passenger name rather than appending a second one.
pub fn execute(cmd: &str, session: &mut SessionRecord) -> Result<CommandPayload, CommandError> {
    if !cmd.starts_with('-') {
        return Err(CommandError::format(
            "Invalid format: Name insert must start with '-'",
            FORMAT_HINT,
        ));
    }

    if !cmd.contains('/') {
        return Err(CommandError::format(
            "Invalid format: Missing '/' separator between Last Name and First Name",
            FORMAT_HINT,
        ));
    }

    let parts: Vec<&str> = cmd[1..].split('/').collect();
    if parts.len() != 2 {
        return Err(CommandError::format(
            "Invalid format: Expected format -[Last Name]/[First Name][Space][Name Title]",
            FORMAT_HINT,
        ));
    }

    let last_name = parts[0].trim();
    let first_and_title = parts[1].trim();

    if last_name.is_empty() {
        return Err(CommandError::format(
            "Invalid format: Last Name cannot be empty",
            FORMAT_HINT,
        ));
    }

    if first_and_title.is_empty() {
        return Err(CommandError::format(
            "Invalid format: First Name and Title cannot be empty",
            FORMAT_HINT,
        ));
    }

    // Title is the trailing whitespace-separated token. Multi-word first
    // names keep their internal spaces.
    let (first_name, title) = match first_and_title.rsplit_once(char::is_whitespace) {
        Some((first, title)) if TITLES.contains(&title) => (first.trim(), title),
        _ => {
            return Err(CommandError::format(
                "Invalid format: Must include a space before title (MR/MRS/MS)",
                FORMAT_HINT,
            ));
        }
    };

    if first_name.is_empty() {
        return Err(CommandError::format(
            "Invalid format: First Name cannot be empty",
            FORMAT_HINT,
        ));
    }

    let last_name = last_name.to_uppercase();
    let first_name = first_name.to_uppercase();
    let formatted = format!("-{}/{} {}<<", last_name, first_name, title);

    let name = PassengerName {
        last_name,
        first_name,
        title: title.to_string(),
        formatted,
    };
    session.set_passenger_name(name.clone());

    Ok(CommandPayload::NameInsert(NameInsertPayload {
        message: "NAME INSERTED SUCCESSFULLY".to_string(),
        name,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_insert_success() {
        let mut session = SessionRecord::new();
        let payload = execute("-HOSSEN/TUSHAR MR", &mut session).unwrap();

        match payload {
            CommandPayload::NameInsert(p) => {
                assert_eq!(p.message, "NAME INSERTED SUCCESSFULLY");
                assert_eq!(p.name.last_name, "HOSSEN");
                assert_eq!(p.name.first_name, "TUSHAR");
                assert_eq!(p.name.title, "MR");
                assert_eq!(p.name.formatted, "-HOSSEN/TUSHAR MR<<");
            }
            other => panic!("unexpected payload: {:?}", other),
        }

        let stored = session.passenger_name.unwrap();
        assert_eq!(stored.formatted, "-HOSSEN/TUSHAR MR<<");
    }

    #[test]
    fn test_name_insert_multi_word_first_name() {
        let mut session = SessionRecord::new();
        let payload = execute("-KHAN/MD TUSHAR MR", &mut session).unwrap();

        match payload {
            CommandPayload::NameInsert(p) => {
                assert_eq!(p.name.first_name, "MD TUSHAR");
                assert_eq!(p.name.formatted, "-KHAN/MD TUSHAR MR<<");
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn test_name_insert_overwrites_previous() {
        let mut session = SessionRecord::new();
        execute("-HOSSEN/TUSHAR MR", &mut session).unwrap();
        execute("-AKTER/NUSRAT MS", &mut session).unwrap();

        let stored = session.passenger_name.unwrap();
        assert_eq!(stored.last_name, "AKTER");
        assert_eq!(stored.title, "MS");
    }

    #[test]
    fn test_name_insert_missing_separator() {
        let mut session = SessionRecord::new();
        let err = execute("-HOSSEN TUSHAR MR", &mut session).unwrap_err();
        assert_eq!(
            err.message,
            "Invalid format: Missing '/' separator between Last Name and First Name"
        );
    }

    #[test]
    fn test_name_insert_missing_title() {
        let mut session = SessionRecord::new();
        let err = execute("-HOSSEN/TUSHAR", &mut session).unwrap_err();
        assert_eq!(
            err.message,
            "Invalid format: Must include a space before title (MR/MRS/MS)"
        );

        let err = execute("-HOSSEN/TUSHAR DR", &mut session).unwrap_err();
        assert_eq!(
            err.message,
            "Invalid format: Must include a space before title (MR/MRS/MS)"
        );
    }

    #[test]
    fn test_name_insert_empty_parts() {
        let mut session = SessionRecord::new();

        let err = execute("-/TUSHAR MR", &mut session).unwrap_err();
        assert_eq!(err.message, "Invalid format: Last Name cannot be empty");

        let err = execute("-HOSSEN/", &mut session).unwrap_err();
        assert_eq!(
            err.message,
            "Invalid format: First Name and Title cannot be empty"
        );

        let err = execute("-HOSSEN/TUSHAR/MR", &mut session).unwrap_err();
        assert_eq!(
            err.message,
            "Invalid format: Expected format -[Last Name]/[First Name][Space][Name Title]"
        );
    }
}

//! Input validation for room lookups

use crate::contract::RoomError;

/// Validate a room number and return its numeric value
///
/// Accepts strings that parse as a positive `i32`. Empty, non-numeric,
/// overflowing, zero and negative values are rejected.
pub fn validate_room_number(room_number: &str) -> Result<i32, RoomError> {
    if room_number.is_empty() {
        return Err(RoomError::invalid_input("room number cannot be empty"));
    }

    let value: i32 = room_number.parse().map_err(|_| {
        RoomError::invalid_input(format!(
            "room number '{}' is not an integer",
            room_number
        ))
    })?;

    if value <= 0 {
        return Err(RoomError::invalid_input(format!(
            "room number must be positive, got {}",
            value
        )));
    }

    Ok(value)
}

/// Validate a room identifier
pub fn validate_room_id(id: i32) -> Result<(), RoomError> {
    if id <= 0 {
        return Err(RoomError::invalid_input(format!(
            "room id must be positive, got {}",
            id
        )));
    }
    Ok(())
}

/// Validate a resource owner identifier
pub fn validate_owner_id(owner_id: i32) -> Result<(), RoomError> {
    if owner_id < 1 {
        return Err(RoomError::invalid_input(format!(
            "resource owner id must be at least 1, got {}",
            owner_id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_room_number_valid() {
        assert_eq!(validate_room_number("101").unwrap(), 101);
        assert_eq!(validate_room_number("1").unwrap(), 1);
        assert_eq!(validate_room_number("007").unwrap(), 7);
    }

    #[test]
    fn test_validate_room_number_invalid() {
        for input in ["", "0", "-5", "abc", "12a", " 12", "99999999999", "1.5"] {
            let result = validate_room_number(input);
            assert!(
                matches!(result, Err(RoomError::InvalidInput { .. })),
                "expected InvalidInput for {:?}, got {:?}",
                input,
                result
            );
        }
    }

    #[test]
    fn test_validate_room_id() {
        assert!(validate_room_id(1).is_ok());
        assert!(validate_room_id(0).is_err());
        assert!(validate_room_id(-1).is_err());
        assert!(validate_room_id(i32::MIN).is_err());
    }

    #[test]
    fn test_validate_owner_id() {
        assert!(validate_owner_id(1).is_ok());
        assert!(validate_owner_id(7).is_ok());
        assert!(matches!(
            validate_owner_id(0),
            Err(RoomError::InvalidInput { .. })
        ));
        assert!(validate_owner_id(-3).is_err());
    }
}

//! Field validation for the login, registration and booking forms.
//!
//! Each `validate_*` function returns the first problem as a user-facing message,
//! in the order the fields appear on the form.

pub const MIN_PASSWORD_LEN: usize = 8;
pub const USERNAME_LEN: std::ops::RangeInclusive<usize> = 4..=20;
pub const MAX_GUESTS: u32 = 20;

/// Loose shape check: `local@domain.tld`, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

pub fn validate_login(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Email is required.".to_string());
    }
    if !is_valid_email(email) {
        return Err("Invalid email address".to_string());
    }
    if password.is_empty() {
        return Err("Password is required.".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }
    Ok(())
}

pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), String> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Username is required.".to_string());
    }
    if !USERNAME_LEN.contains(&username.chars().count()) {
        return Err("The username must contain between 4 and 20 characters.".to_string());
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(
            "The username can only contain letters, numbers, and underscores (_).".to_string(),
        );
    }
    if email.trim().is_empty() {
        return Err("Email is required.".to_string());
    }
    if !is_valid_email(email) {
        return Err("Invalid email address".to_string());
    }
    if password.is_empty() {
        return Err("Password is required.".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("The password must contain at least 8 characters.".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err("The password must include at least one letter.".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("The password must include at least one number.".to_string());
    }
    if confirm_password.is_empty() {
        return Err("Please confirm your password.".to_string());
    }
    if password != confirm_password {
        return Err("Passwords do not match, please ensure both password entries are the same."
            .to_string());
    }
    Ok(())
}

/// Check a booking form and return the parsed guest count.
pub fn validate_booking(date: &str, time: &str, guests: &str) -> Result<u32, String> {
    if !is_iso_date(date.trim()) {
        return Err("Please pick a date.".to_string());
    }
    if !is_clock_time(time.trim()) {
        return Err("Please pick a time.".to_string());
    }
    let guests: u32 = guests
        .trim()
        .parse()
        .map_err(|_| "Number of guests must be a whole number.".to_string())?;
    if guests == 0 || guests > MAX_GUESTS {
        return Err(format!("Bookings are for 1 to {MAX_GUESTS} guests."));
    }
    Ok(guests)
}

/// `YYYY-MM-DD` with a plausible month and day.
fn is_iso_date(s: &str) -> bool {
    let parts: Vec<&str> = s.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return false;
    };
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return false;
    }
    match (year.parse::<u32>(), month.parse::<u32>(), day.parse::<u32>()) {
        (Ok(_), Ok(m), Ok(d)) => (1..=12).contains(&m) && (1..=31).contains(&d),
        _ => false,
    }
}

/// `HH:MM` on a 24-hour clock. Browsers may append `:SS`.
fn is_clock_time(s: &str) -> bool {
    let mut parts = s.split(':');
    let (Some(h), Some(m)) = (parts.next(), parts.next()) else {
        return false;
    };
    if h.len() != 2 || m.len() != 2 {
        return false;
    }
    matches!((h.parse::<u32>(), m.parse::<u32>()), (Ok(h), Ok(m)) if h < 24 && m < 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("  first.last@mail.dineflex.ie "));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("us er@example.com"));
    }

    #[test]
    fn test_login_rules() {
        assert!(validate_login("user@example.com", "password123").is_ok());
        assert_eq!(
            validate_login("", "password123").unwrap_err(),
            "Email is required."
        );
        assert_eq!(
            validate_login("nope", "password123").unwrap_err(),
            "Invalid email address"
        );
        assert_eq!(
            validate_login("user@example.com", "short").unwrap_err(),
            "Password must be at least 8 characters"
        );
    }

    #[test]
    fn test_registration_rules() {
        assert!(validate_registration("diner_1", "a@b.ie", "abcdefg1", "abcdefg1").is_ok());

        let err = validate_registration("abc", "a@b.ie", "abcdefg1", "abcdefg1").unwrap_err();
        assert!(err.contains("between 4 and 20"));

        let err =
            validate_registration("bad-name", "a@b.ie", "abcdefg1", "abcdefg1").unwrap_err();
        assert!(err.contains("underscores"));

        let err = validate_registration("diner_1", "a@b.ie", "abcdefgh", "abcdefgh").unwrap_err();
        assert!(err.contains("one number"));

        let err = validate_registration("diner_1", "a@b.ie", "12345678", "12345678").unwrap_err();
        assert!(err.contains("one letter"));

        let err = validate_registration("diner_1", "a@b.ie", "abcdefg1", "abcdefg2").unwrap_err();
        assert!(err.starts_with("Passwords do not match"));
    }

    #[test]
    fn test_password_length_counts_characters() {
        // 8 bytes, 5 characters
        let short = "äöüa1";
        assert_eq!(short.len(), 8);

        assert!(validate_login("user@example.com", short).is_err());
        let err = validate_registration("diner_1", "a@b.ie", short, short).unwrap_err();
        assert!(err.contains("at least 8 characters"));

        assert!(validate_login("user@example.com", "äöüabcd1").is_ok());
    }

    #[test]
    fn test_booking_rules() {
        assert_eq!(validate_booking("2025-06-01", "19:30", "2"), Ok(2));
        assert_eq!(validate_booking("2025-06-01", "19:30:00", " 4 "), Ok(4));
        assert!(validate_booking("", "19:30", "2").is_err());
        assert!(validate_booking("2025-13-01", "19:30", "2").is_err());
        assert!(validate_booking("2025-06-01", "25:00", "2").is_err());
        assert!(validate_booking("2025-06-01", "19:30", "0").is_err());
        assert!(validate_booking("2025-06-01", "19:30", "21").is_err());
        assert!(validate_booking("2025-06-01", "19:30", "two").is_err());
    }
}

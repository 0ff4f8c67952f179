use std::fmt;

use phonenumber::country;

use crate::domain::validation::ValidationError;

/// Number of digits in a Notify account username.
pub const USERNAME_DIGITS: usize = 12;

/// Returns `true` if `input` has the shape of a Notify account username.
///
/// The service logs users in with their phone number written as exactly
/// twelve ASCII digits (`260979000000`). A leading `+` is rejected even though
/// displayed phone numbers usually carry one.
pub fn is_valid_username(input: &str) -> bool {
    input.len() == USERNAME_DIGITS && input.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Notify account username.
///
/// Invariant: passes [`is_valid_username`].
pub struct Username(String);

impl Username {
    /// JSON field name used by the login endpoint (`username`).
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !is_valid_username(&value) {
            return Err(ValidationError::InvalidUsername { input: value });
        }
        Ok(Self(value))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Notify account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// JSON field name used by the login endpoint (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Bearer token returned by the login endpoint.
///
/// Invariant: non-empty after trimming.
pub struct SessionToken(String);

impl SessionToken {
    /// JSON field name inside the login payload (`token`).
    pub const FIELD: &'static str = "token";

    /// Create a validated [`SessionToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header carrying this token.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender id a message appears to come from (`senderId`).
///
/// Invariant: non-empty after trimming. The value should come from
/// [`crate::NotifyClient::list_senders`].
pub struct SenderId(String);

impl SenderId {
    /// JSON field name used by the compose endpoint (`senderId`).
    pub const FIELD: &'static str = "senderId";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`message`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// JSON field name used by the compose endpoint (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated phone number of a single recipient.
///
/// Invariant: non-empty after trimming. This type does not normalize; if you want E.164
/// normalization, parse into [`PhoneNumber`] and convert it into [`Contact`].
pub struct Contact(String);

impl Contact {
    /// JSON field name used by the compose endpoint (`reciepients`, spelled as on the wire).
    pub const FIELD: &'static str = "reciepients";

    /// Create a validated (non-empty) contact.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to the service.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for Contact {
    /// Convert an already-parsed phone number to its E.164 form.
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing use the E.164 form only.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: Contact::FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_validator_accepts_exactly_twelve_digits() {
        assert!(is_valid_username("260979000000"));

        assert!(!is_valid_username(""));
        assert!(!is_valid_username("hello"));
        assert!(!is_valid_username("26097900000"));
        assert!(!is_valid_username("2609790000000"));
        assert!(!is_valid_username("26097900000a"));
        assert!(!is_valid_username(" 60979000000"));
    }

    #[test]
    fn username_validator_rejects_leading_plus() {
        assert!(!is_valid_username("+26097900000"));
        assert!(!is_valid_username("+260979000000"));
    }

    #[test]
    fn username_reports_empty_before_shape() {
        assert_eq!(
            Username::new(""),
            Err(ValidationError::Empty {
                field: Username::FIELD
            })
        );
        assert_eq!(
            Username::new("hello"),
            Err(ValidationError::InvalidUsername {
                input: "hello".to_owned()
            })
        );
        assert_eq!(
            Username::new("260979000000").unwrap().as_str(),
            "260979000000"
        );
    }

    #[test]
    fn string_newtypes_trim_or_validate() {
        let password = Password::new(" secret ").unwrap();
        assert_eq!(password.as_str(), " secret ");
        assert!(Password::new("").is_err());

        let sender = SenderId::new(" sender ").unwrap();
        assert_eq!(sender.as_str(), "sender");
        assert!(SenderId::new("   ").is_err());

        let msg = MessageText::new(" hi ").unwrap();
        assert_eq!(msg.as_str(), " hi ");
        assert!(MessageText::new("  ").is_err());

        let contact = Contact::new(" +260979600000 ").unwrap();
        assert_eq!(contact.raw(), "+260979600000");
        assert!(Contact::new("").is_err());

        let token = SessionToken::new(" abc ").unwrap();
        assert_eq!(token.as_str(), "abc");
        assert_eq!(token.bearer(), "Bearer abc");
        assert!(SessionToken::new("").is_err());
    }

    #[test]
    fn secrets_are_redacted_in_debug_output() {
        let password = Password::new("hunter2").unwrap();
        assert_eq!(format!("{password:?}"), "Password(***)");

        let token = SessionToken::new("T").unwrap();
        assert_eq!(format!("{token:?}"), "SessionToken(***)");
    }

    #[test]
    fn phone_number_parsing_and_equality_use_e164() {
        let p1 = PhoneNumber::parse(None, "+260979600000").unwrap();
        let p2 = PhoneNumber::parse(None, "+260 97 9600000").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.e164(), "+260979600000");
        assert_eq!(p2.raw(), "+260 97 9600000");

        let contact: Contact = p2.into();
        assert_eq!(contact.raw(), "+260979600000");
        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
    }

    #[test]
    fn phone_number_uses_default_region_without_prefix() {
        let pn = PhoneNumber::parse(Some(country::Id::ZM), "0979600000").unwrap();
        assert_eq!(pn.e164(), "+260979600000");
    }

    #[test]
    fn phone_numbers_sort_and_dedup_by_e164() {
        let mut numbers = vec![
            PhoneNumber::parse(None, "+260979600001").unwrap(),
            PhoneNumber::parse(Some(country::Id::ZM), "0979600000").unwrap(),
            PhoneNumber::parse(None, "+260 97 9600000").unwrap(),
        ];
        numbers.sort();
        numbers.dedup();

        let e164: Vec<_> = numbers.iter().map(PhoneNumber::e164).collect();
        assert_eq!(e164, ["+260979600000", "+260979600001"]);
    }
}

//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    ChannelMessage, ContactGroupMessage, ContactsMessage, CreateSenderId, Credentials, Message,
    RecipientType,
};
pub use response::{SenderIdentity, SenderTracker};
pub use validation::ValidationError;
pub use value::{
    Contact, MessageText, Password, PhoneNumber, SenderId, SessionToken, USERNAME_DIGITS,
    Username, is_valid_username,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_report_missing_parts() {
        assert!(matches!(
            Credentials::new("", "hello123"),
            Err(ValidationError::Empty {
                field: Username::FIELD
            })
        ));
        assert!(matches!(
            Credentials::new("hello", ""),
            Err(ValidationError::Empty {
                field: Password::FIELD
            })
        ));
    }

    #[test]
    fn credentials_reject_malformed_username() {
        assert!(matches!(
            Credentials::new("hello", "hello123"),
            Err(ValidationError::InvalidUsername { .. })
        ));
        assert!(matches!(
            Credentials::new("+26097900000", "hello123"),
            Err(ValidationError::InvalidUsername { .. })
        ));

        let creds = Credentials::new("260979000000", "hello123").unwrap();
        assert_eq!(creds.username().as_str(), "260979000000");
        assert_eq!(creds.password().as_str(), "hello123");
    }

    #[test]
    fn contacts_message_requires_contacts() {
        let input = ContactsMessage {
            sender_id: "test_sender_id".to_owned(),
            message: "Hello".to_owned(),
            contacts: Vec::new(),
        };
        assert_eq!(
            Message::try_from(input),
            Err(ValidationError::MissingContacts)
        );

        let err = Message::to_contacts(
            SenderId::new("s").unwrap(),
            MessageText::new("m").unwrap(),
            Vec::new(),
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingContacts);
    }

    #[test]
    fn missing_contacts_wins_over_other_empty_fields() {
        let err = Message::try_from(ContactsMessage::default()).unwrap_err();
        assert_eq!(err, ValidationError::MissingContacts);
    }

    #[test]
    fn shared_fields_are_required_for_every_variant() {
        let err = Message::try_from(ChannelMessage {
            sender_id: " ".to_owned(),
            message: "hi".to_owned(),
            channel: "sms_channel".to_owned(),
        })
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::Empty {
                field: SenderId::FIELD
            }
        );

        let err = Message::try_from(ContactGroupMessage {
            sender_id: "sender".to_owned(),
            message: String::new(),
            contact_group: "group".to_owned(),
        })
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::Empty {
                field: MessageText::FIELD
            }
        );
    }

    #[test]
    fn channel_and_group_targets_are_not_validated_locally() {
        let message = Message::try_from(ChannelMessage {
            sender_id: "sender".to_owned(),
            message: "hi".to_owned(),
            channel: String::new(),
        })
        .unwrap();
        assert_eq!(message.recipient_type(), RecipientType::Channel);

        let message = Message::try_from(ContactGroupMessage {
            sender_id: "sender".to_owned(),
            message: "hi".to_owned(),
            contact_group: String::new(),
        })
        .unwrap();
        assert_eq!(message.recipient_type(), RecipientType::ContactGroup);
    }

    #[test]
    fn recipient_type_wire_values() {
        assert_eq!(RecipientType::Custom.as_str(), "NOTIFY_RECIEPIENT_TYPE_CUSTOM");
        assert_eq!(RecipientType::Channel.as_str(), "NOTIFY_RECIEPIENT_TYPE_CHANNEL");
        assert_eq!(
            RecipientType::ContactGroup.as_str(),
            "NOTIFY_RECIEPIENT_TYPE_CONTACT_GROUP"
        );
    }
}

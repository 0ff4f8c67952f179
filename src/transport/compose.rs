use serde::Serialize;

use super::envelope::TransportError;
use crate::domain::{Contact, Message};

#[derive(Debug, Serialize)]
struct ComposeJsonRequest<'a> {
    #[serde(rename = "reciepientType")]
    recipient_type: &'static str,
    #[serde(rename = "senderId")]
    sender_id: &'a str,
    message: &'a str,
    #[serde(rename = "reciepients", skip_serializing_if = "Option::is_none")]
    recipients: Option<Vec<&'a str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<&'a str>,
    #[serde(rename = "contactGroup", skip_serializing_if = "Option::is_none")]
    contact_group: Option<&'a str>,
}

pub fn encode_compose_json(message: &Message) -> Result<String, TransportError> {
    let mut request = ComposeJsonRequest {
        recipient_type: message.recipient_type().as_str(),
        sender_id: message.sender_id().as_str(),
        message: message.message().as_str(),
        recipients: None,
        channel: None,
        contact_group: None,
    };

    match message {
        Message::ToContacts { contacts, .. } => {
            request.recipients = Some(contacts.iter().map(Contact::raw).collect());
        }
        Message::ToChannel { channel, .. } => request.channel = Some(channel.as_str()),
        Message::ToContactGroup { group, .. } => request.contact_group = Some(group.as_str()),
    }

    Ok(serde_json::to_string(&request)?)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::{ChannelMessage, ContactGroupMessage, ContactsMessage};

    fn encode(message: Message) -> Value {
        serde_json::from_str(&encode_compose_json(&message).unwrap()).unwrap()
    }

    #[test]
    fn encode_contacts_uses_wire_spelling() {
        let message = Message::try_from(ContactsMessage {
            sender_id: "test_sender_id".to_owned(),
            message: "Hello Patrick".to_owned(),
            contacts: vec!["+260979600000".to_owned(), "+260979600001".to_owned()],
        })
        .unwrap();

        assert_eq!(
            encode(message),
            json!({
                "reciepientType": "NOTIFY_RECIEPIENT_TYPE_CUSTOM",
                "senderId": "test_sender_id",
                "message": "Hello Patrick",
                "reciepients": ["+260979600000", "+260979600001"],
            })
        );
    }

    #[test]
    fn encode_channel_round_trips_fields() {
        let message = Message::try_from(ChannelMessage {
            sender_id: "test_sender_id".to_owned(),
            message: "test message".to_owned(),
            channel: "sms_channel".to_owned(),
        })
        .unwrap();

        let body = encode(message);
        assert_eq!(body["reciepientType"], "NOTIFY_RECIEPIENT_TYPE_CHANNEL");
        assert_eq!(body["senderId"], "test_sender_id");
        assert_eq!(body["channel"], "sms_channel");
        assert_eq!(body["message"], "test message");
        assert!(body.get("reciepients").is_none());
        assert!(body.get("contactGroup").is_none());
    }

    #[test]
    fn encode_contact_group_sets_only_group_target() {
        let message = Message::try_from(ContactGroupMessage {
            sender_id: "test_sender_id".to_owned(),
            message: "test message".to_owned(),
            contact_group: "group_1".to_owned(),
        })
        .unwrap();

        assert_eq!(
            encode(message),
            json!({
                "reciepientType": "NOTIFY_RECIEPIENT_TYPE_CONTACT_GROUP",
                "senderId": "test_sender_id",
                "message": "test message",
                "contactGroup": "group_1",
            })
        );
    }
}

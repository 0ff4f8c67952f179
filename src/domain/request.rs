use crate::domain::validation::ValidationError;
use crate::domain::value::{Contact, MessageText, Password, SenderId, Username};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Username/password pair used to log in.
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Validate a username/password pair.
    ///
    /// Missing parts are reported before the username shape is checked.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let username = username.into();
        let password = Password::new(password)?;
        Ok(Self {
            username: Username::new(username)?,
            password,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Discriminator telling the service who a message goes to.
pub enum RecipientType {
    Custom,
    Channel,
    ContactGroup,
}

impl RecipientType {
    /// JSON field name used by the compose endpoint (`reciepientType`, spelled as on the wire).
    pub const FIELD: &'static str = "reciepientType";

    /// Wire value of this recipient type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Custom => "NOTIFY_RECIEPIENT_TYPE_CUSTOM",
            Self::Channel => "NOTIFY_RECIEPIENT_TYPE_CHANNEL",
            Self::ContactGroup => "NOTIFY_RECIEPIENT_TYPE_CONTACT_GROUP",
        }
    }
}

/// Unvalidated input for [`crate::NotifyClient::send_to_contacts`].
#[derive(Debug, Clone, Default)]
pub struct ContactsMessage {
    pub sender_id: String,
    pub message: String,
    /// Phone numbers, e.g. `+260979600000`.
    pub contacts: Vec<String>,
}

/// Unvalidated input for [`crate::NotifyClient::send_to_channel`].
#[derive(Debug, Clone, Default)]
pub struct ChannelMessage {
    pub sender_id: String,
    pub message: String,
    pub channel: String,
}

/// Unvalidated input for [`crate::NotifyClient::send_to_contact_group`].
#[derive(Debug, Clone, Default)]
pub struct ContactGroupMessage {
    pub sender_id: String,
    pub message: String,
    /// Id of the contact group.
    pub contact_group: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A validated message ready to be composed into a request body.
pub enum Message {
    ToContacts {
        sender_id: SenderId,
        message: MessageText,
        contacts: Vec<Contact>,
    },
    ToChannel {
        sender_id: SenderId,
        message: MessageText,
        channel: String,
    },
    ToContactGroup {
        sender_id: SenderId,
        message: MessageText,
        group: String,
    },
}

impl Message {
    /// Build a message for an explicit list of contacts.
    ///
    /// Fails with [`ValidationError::MissingContacts`] when `contacts` is empty.
    pub fn to_contacts(
        sender_id: SenderId,
        message: MessageText,
        contacts: Vec<Contact>,
    ) -> Result<Self, ValidationError> {
        if contacts.is_empty() {
            return Err(ValidationError::MissingContacts);
        }
        Ok(Self::ToContacts {
            sender_id,
            message,
            contacts,
        })
    }

    /// Build a message for a named channel. The channel is not validated locally.
    pub fn to_channel(sender_id: SenderId, message: MessageText, channel: impl Into<String>) -> Self {
        Self::ToChannel {
            sender_id,
            message,
            channel: channel.into(),
        }
    }

    /// Build a message for a contact group. The group id is not validated locally.
    pub fn to_contact_group(
        sender_id: SenderId,
        message: MessageText,
        group: impl Into<String>,
    ) -> Self {
        Self::ToContactGroup {
            sender_id,
            message,
            group: group.into(),
        }
    }

    pub fn recipient_type(&self) -> RecipientType {
        match self {
            Self::ToContacts { .. } => RecipientType::Custom,
            Self::ToChannel { .. } => RecipientType::Channel,
            Self::ToContactGroup { .. } => RecipientType::ContactGroup,
        }
    }

    pub fn sender_id(&self) -> &SenderId {
        match self {
            Self::ToContacts { sender_id, .. }
            | Self::ToChannel { sender_id, .. }
            | Self::ToContactGroup { sender_id, .. } => sender_id,
        }
    }

    pub fn message(&self) -> &MessageText {
        match self {
            Self::ToContacts { message, .. }
            | Self::ToChannel { message, .. }
            | Self::ToContactGroup { message, .. } => message,
        }
    }
}

impl TryFrom<ContactsMessage> for Message {
    type Error = ValidationError;

    fn try_from(value: ContactsMessage) -> Result<Self, Self::Error> {
        if value.contacts.is_empty() {
            return Err(ValidationError::MissingContacts);
        }
        let contacts = value
            .contacts
            .into_iter()
            .map(Contact::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::to_contacts(
            SenderId::new(value.sender_id)?,
            MessageText::new(value.message)?,
            contacts,
        )
    }
}

impl TryFrom<ChannelMessage> for Message {
    type Error = ValidationError;

    fn try_from(value: ChannelMessage) -> Result<Self, Self::Error> {
        Ok(Self::to_channel(
            SenderId::new(value.sender_id)?,
            MessageText::new(value.message)?,
            value.channel,
        ))
    }
}

impl TryFrom<ContactGroupMessage> for Message {
    type Error = ValidationError;

    fn try_from(value: ContactGroupMessage) -> Result<Self, Self::Error> {
        Ok(Self::to_contact_group(
            SenderId::new(value.sender_id)?,
            MessageText::new(value.message)?,
            value.contact_group,
        ))
    }
}

/// Parameters for registering a new sender id.
#[derive(Debug, Clone, Default)]
pub struct CreateSenderId {
    pub business_name: String,
    pub description: String,
}

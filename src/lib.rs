//! Typed Rust client for the Notify SMS HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for
//! wire-format quirks (the service spells `reciepients` and `reciepientType`
//! that way), and a small client layer that logs in once and dispatches
//! requests with the resulting bearer token.
//!
//! ```rust,no_run
//! use notify_sms::{ContactsMessage, NotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), notify_sms::NotifyError> {
//!     let client = NotifyClient::connect("260979000000", "...").await?;
//!     client
//!         .send_to_contacts(ContactsMessage {
//!             sender_id: "...".to_owned(),
//!             message: "hello".to_owned(),
//!             contacts: vec!["+260979600000".to_owned()],
//!         })
//!         .await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BoxError, BoxFuture, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, HttpMethod, HttpRequest, HttpResponse,
    HttpTransport, NotifyClient, NotifyClientBuilder, NotifyError,
};
pub use domain::{
    ChannelMessage, Contact, ContactGroupMessage, ContactsMessage, CreateSenderId, Credentials,
    Message, MessageText, PhoneNumber, RecipientType, SenderId, SenderIdentity, SenderTracker,
    SessionToken, ValidationError, is_valid_username,
};

//! Transport layer: JSON wire-format details (serialization/deserialization).

mod compose;
mod envelope;
mod login;
mod senders;

pub use compose::encode_compose_json;
pub use envelope::{Envelope, TransportError, decode_envelope};
pub use login::{decode_login_json_response, encode_login_json};
pub use senders::decode_senders_json_response;

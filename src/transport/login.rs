use serde::{Deserialize, Serialize};

use super::envelope::{Envelope, TransportError, decode_envelope};
use crate::domain::Credentials;

#[derive(Debug, Serialize)]
struct LoginJsonRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginJsonPayload {
    #[serde(default)]
    pub token: Option<String>,
}

pub fn encode_login_json(credentials: &Credentials) -> Result<String, TransportError> {
    Ok(serde_json::to_string(&LoginJsonRequest {
        username: credentials.username().as_str(),
        password: credentials.password().as_str(),
    })?)
}

pub fn decode_login_json_response(
    json: &str,
) -> Result<Envelope<LoginJsonPayload>, TransportError> {
    decode_envelope(json)
}

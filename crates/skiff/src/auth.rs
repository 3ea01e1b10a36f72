//! Registry authentication header encoding.
//!
//! Registry-facing endpoints (image push/pull, plugin pull, service
//! create) take an `X-Registry-Auth` header carrying a base64url-encoded
//! JSON credential. The value is opaque to this client: it is encoded
//! and forwarded verbatim, never stored or validated locally.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use serde::Serialize;

use crate::error::{EngineError, Result};

/// Credential forwarded in the `X-Registry-Auth` header.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RegistryAuth {
    /// Username/password credentials for a registry.
    Credentials {
        /// Registry account name.
        username: String,
        /// Password or personal access token.
        password: String,
        /// Account email, where the registry wants one.
        #[serde(skip_serializing_if = "Option::is_none")]
        email: Option<String>,
        /// Registry domain/IP without a protocol.
        serveraddress: String,
    },
    /// Identity token previously obtained from the auth endpoint.
    IdentityToken {
        /// The token, passed through unchanged.
        identitytoken: String,
    },
}

impl RegistryAuth {
    /// Credentials for a registry account.
    #[must_use]
    pub fn credentials(
        username: impl Into<String>,
        password: impl Into<String>,
        serveraddress: impl Into<String>,
    ) -> Self {
        Self::Credentials {
            username: username.into(),
            password: password.into(),
            email: None,
            serveraddress: serveraddress.into(),
        }
    }

    /// An identity token from a previous auth call.
    #[must_use]
    pub fn identity_token(token: impl Into<String>) -> Self {
        Self::IdentityToken {
            identitytoken: token.into(),
        }
    }

    /// Encodes the credential as a base64url JSON string, the form the
    /// `X-Registry-Auth` header expects.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn header_value(&self) -> Result<String> {
        let json = serde_json::to_vec(self).map_err(EngineError::Serialize)?;
        Ok(URL_SAFE.encode(json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(value: &str) -> serde_json::Value {
        let bytes = URL_SAFE.decode(value).unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn credentials_encode_documented_keys() {
        let auth = RegistryAuth::credentials("user", "secret", "registry.test");
        let json = decode(&auth.header_value().unwrap());
        assert_eq!(json["username"], "user");
        assert_eq!(json["password"], "secret");
        assert_eq!(json["serveraddress"], "registry.test");
        assert!(json.get("email").is_none());
    }

    #[test]
    fn identity_token_encodes_single_key() {
        let auth = RegistryAuth::identity_token("9cbaf023786cd7");
        let json = decode(&auth.header_value().unwrap());
        assert_eq!(json["identitytoken"], "9cbaf023786cd7");
        assert_eq!(json.as_object().unwrap().len(), 1);
    }
}

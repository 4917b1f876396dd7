//! Signed OAuth2 `state` parameter.
//!
//! The login endpoint issues a token of the form `<raw>.<signature>` where `raw` is a
//! random URL-safe string and `signature` is the lowercase hex HMAC-SHA256 of `raw` under
//! the server secret. The callback accepts the state only if the signature verifies, so
//! no per-login session storage is needed.

use std::sync::Arc;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Random bytes per token, 32 URL-safe characters once encoded.
const RAW_BYTES: usize = 24;
const SEPARATOR: char = '.';

/// Issues and verifies signed state tokens.
///
/// Cheap to clone; the secret is shared.
#[derive(Clone)]
pub struct StateTokenSigner {
    secret: Arc<[u8]>,
}

impl StateTokenSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: Arc::from(secret.as_bytes()),
        }
    }

    /// Generates a fresh random token signed with the server secret.
    pub fn issue(&self) -> String {
        let mut raw = [0u8; RAW_BYTES];
        rand::rng().fill_bytes(&mut raw);

        self.sign(&URL_SAFE_NO_PAD.encode(raw))
    }

    /// Appends the signature of `raw` to it.
    pub fn sign(&self, raw: &str) -> String {
        format!("{raw}{SEPARATOR}{}", self.signature(raw))
    }

    /// Checks that `token` was produced by `sign` with this secret.
    ///
    /// The signature is split at the last separator, so a raw part containing a `.`
    /// still verifies. Malformed input (no separator, empty raw part, empty signature)
    /// is rejected without error. Signatures are compared in constant time and only
    /// the lowercase hex form is accepted.
    pub fn verify(&self, token: &str) -> bool {
        let Some((raw, signature)) = token.rsplit_once(SEPARATOR) else {
            return false;
        };
        if raw.is_empty() || signature.is_empty() {
            return false;
        }

        let expected = self.signature(raw);
        expected.as_bytes().ct_eq(signature.as_bytes()).into()
    }

    fn signature(&self, raw: &str) -> String {
        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC can take key of any size");
        mac.update(raw.as_bytes());

        hex::encode(mac.finalize().into_bytes())
    }
}

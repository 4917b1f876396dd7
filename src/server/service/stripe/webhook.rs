use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::server::{
    error::{config::ConfigError, stripe::StripeError, AppError},
    model::stripe::StripeEvent,
    service::stripe::StripeService,
};

/// Maximum age, in either direction, of a signed webhook timestamp.
pub const SIGNATURE_TOLERANCE_SECS: i64 = 300;

/// Parsed `Stripe-Signature` header.
struct SignatureHeader<'h> {
    timestamp: i64,
    signatures: Vec<&'h str>,
}

impl<'h> SignatureHeader<'h> {
    /// Parses `t=<unix>,v1=<hex>[,v1=<hex>...]`; other schemes are ignored.
    fn parse(header: &'h str) -> Option<Self> {
        let mut timestamp = None;
        let mut signatures = Vec::new();

        for item in header.split(',') {
            match item.trim().split_once('=') {
                Some(("t", value)) => timestamp = value.parse::<i64>().ok(),
                Some(("v1", value)) if !value.is_empty() => signatures.push(value),
                _ => {}
            }
        }

        Some(Self {
            timestamp: timestamp?,
            signatures,
        })
    }
}

impl StripeService<'_> {
    /// Authenticates a webhook request and decodes its event.
    ///
    /// # Arguments
    /// - `payload` - Raw request body, exactly as received
    /// - `signature` - Value of the `Stripe-Signature` header
    /// - `now` - Current time, compared against the signed timestamp
    ///
    /// # Returns
    /// - `Ok(StripeEvent)` - Authentic event
    /// - `Err(AppError::ConfigErr)` - `STRIPE_WEBHOOK_SECRET` not configured
    /// - `Err(StripeError::MissingSignature)` - No signature header
    /// - `Err(StripeError::InvalidSignature)` - No `v1` signature matches, or the
    ///   timestamp is outside the tolerance
    /// - `Err(StripeError::InvalidPayload)` - Authentic body that is not an event
    pub fn verify_webhook(
        &self,
        payload: &[u8],
        signature: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<StripeEvent, AppError> {
        ConfigError::require(&[("STRIPE_WEBHOOK_SECRET", self.config.webhook_secret.is_some())])?;
        let secret = self.config.webhook_secret.as_deref().unwrap_or_default();

        let header = signature
            .filter(|header| !header.trim().is_empty())
            .ok_or(StripeError::MissingSignature)?;
        let header = SignatureHeader::parse(header).ok_or(StripeError::InvalidSignature)?;

        if now.timestamp().abs_diff(header.timestamp) > SIGNATURE_TOLERANCE_SECS.unsigned_abs() {
            return Err(StripeError::InvalidSignature.into());
        }

        let expected = expected_signature(secret, header.timestamp, payload);
        let matched = header
            .signatures
            .iter()
            .any(|candidate| bool::from(expected.as_bytes().ct_eq(candidate.as_bytes())));
        if !matched {
            return Err(StripeError::InvalidSignature.into());
        }

        serde_json::from_slice::<StripeEvent>(payload)
            .map_err(|e| StripeError::InvalidPayload(e.to_string()).into())
    }
}

/// Lowercase hex HMAC-SHA256 of `"<timestamp>.<payload>"`.
fn expected_signature(secret: &str, timestamp: i64, payload: &[u8]) -> String {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);

    hex::encode(mac.finalize().into_bytes())
}

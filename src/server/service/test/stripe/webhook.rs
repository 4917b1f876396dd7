use super::*;
use crate::server::service::stripe::webhook::SIGNATURE_TOLERANCE_SECS;

fn payload(event: serde_json::Value) -> Vec<u8> {
    serde_json::to_vec(&event).unwrap()
}

/// Tests a correctly signed checkout completion.
///
/// Expected: Ok(event) carrying the Discord id as reference
#[tokio::test]
async fn accepts_signed_event() {
    let test = TestBuilder::new().with_stripe().build().await;
    let config = test_config(&test);
    let http_client = reqwest::Client::new();
    let service = StripeService::new(&http_client, &config.stripe);
    let now = Utc::now();
    let body = payload(fixture::checkout_completed_event("u1"));
    let header = fixture::stripe_signature(fixture::STRIPE_WEBHOOK_SECRET, now.timestamp(), &body);

    let event = service.verify_webhook(&body, Some(&header), now).unwrap();

    assert_eq!(event.completed_checkout_reference(), Some("u1".to_string()));
}

/// Tests a header carrying several `v1` signatures, as during secret rotation.
///
/// Expected: accepted when any one of them matches
#[tokio::test]
async fn accepts_any_matching_signature() {
    let test = TestBuilder::new().with_stripe().build().await;
    let config = test_config(&test);
    let http_client = reqwest::Client::new();
    let service = StripeService::new(&http_client, &config.stripe);
    let now = Utc::now();
    let body = payload(fixture::unrelated_event());
    let valid = fixture::stripe_signature(fixture::STRIPE_WEBHOOK_SECRET, now.timestamp(), &body);
    let header = valid.replacen(",v1=", &format!(",v1={},v1=", "0".repeat(64)), 1);

    assert!(service.verify_webhook(&body, Some(&header), now).is_ok());
}

/// Tests deliveries that must be refused.
///
/// Verifies missing headers, wrong secrets, modified bodies and stale timestamps.
///
/// Expected: MissingSignature for no header, InvalidSignature otherwise
#[tokio::test]
async fn rejects_unauthentic_deliveries() {
    let test = TestBuilder::new().with_stripe().build().await;
    let config = test_config(&test);
    let http_client = reqwest::Client::new();
    let service = StripeService::new(&http_client, &config.stripe);
    let now = Utc::now();
    let body = payload(fixture::checkout_completed_event("u1"));
    let secret = fixture::STRIPE_WEBHOOK_SECRET;

    assert!(matches!(
        service.verify_webhook(&body, None, now),
        Err(AppError::StripeErr(StripeError::MissingSignature))
    ));

    let wrong_secret = fixture::stripe_signature("whsec_other", now.timestamp(), &body);
    let stale = fixture::stripe_signature(secret, now.timestamp() - SIGNATURE_TOLERANCE_SECS - 1, &body);
    let future = fixture::stripe_signature(secret, now.timestamp() + SIGNATURE_TOLERANCE_SECS + 1, &body);
    let other_body = fixture::stripe_signature(secret, now.timestamp(), b"{}");

    for header in [
        wrong_secret.as_str(),
        stale.as_str(),
        future.as_str(),
        other_body.as_str(),
        "garbage",
        "v1=abc",
    ] {
        assert!(
            matches!(
                service.verify_webhook(&body, Some(header), now),
                Err(AppError::StripeErr(StripeError::InvalidSignature))
            ),
            "accepted {header}"
        );
    }
}

/// Tests timestamps at the limits of the integer range.
///
/// Verifies that the age check cannot overflow before the signature is compared.
///
/// Expected: InvalidSignature for both extremes
#[tokio::test]
async fn rejects_extreme_timestamps() {
    let test = TestBuilder::new().with_stripe().build().await;
    let config = test_config(&test);
    let http_client = reqwest::Client::new();
    let service = StripeService::new(&http_client, &config.stripe);
    let now = Utc::now();

    for header in [
        format!("t={},v1=aa", i64::MIN),
        format!("t={},v1=aa", i64::MAX),
    ] {
        assert!(
            matches!(
                service.verify_webhook(b"{}", Some(&header), now),
                Err(AppError::StripeErr(StripeError::InvalidSignature))
            ),
            "accepted {header}"
        );
    }
}

/// Tests a delivery at the edge of the tolerance window.
///
/// Expected: accepted
#[tokio::test]
async fn accepts_timestamp_at_tolerance() {
    let test = TestBuilder::new().with_stripe().build().await;
    let config = test_config(&test);
    let http_client = reqwest::Client::new();
    let service = StripeService::new(&http_client, &config.stripe);
    let now = Utc::now();
    let body = payload(fixture::unrelated_event());
    let header = fixture::stripe_signature(
        fixture::STRIPE_WEBHOOK_SECRET,
        now.timestamp() - SIGNATURE_TOLERANCE_SECS,
        &body,
    );

    assert!(service.verify_webhook(&body, Some(&header), now).is_ok());
}

/// Tests an authentic body that is not a Stripe event.
///
/// Expected: Err(InvalidPayload)
#[tokio::test]
async fn rejects_signed_non_event() {
    let test = TestBuilder::new().with_stripe().build().await;
    let config = test_config(&test);
    let http_client = reqwest::Client::new();
    let service = StripeService::new(&http_client, &config.stripe);
    let now = Utc::now();
    let body = b"{\"hello\":\"world\"}".to_vec();
    let header = fixture::stripe_signature(fixture::STRIPE_WEBHOOK_SECRET, now.timestamp(), &body);

    assert!(matches!(
        service.verify_webhook(&body, Some(&header), now),
        Err(AppError::StripeErr(StripeError::InvalidPayload(_)))
    ));
}

/// Tests webhook delivery with no signing secret configured.
///
/// Expected: Err(ConfigErr)
#[tokio::test]
async fn requires_webhook_secret() {
    let test = TestBuilder::new().build().await;
    let config = test_config(&test);
    let http_client = reqwest::Client::new();
    let service = StripeService::new(&http_client, &config.stripe);
    let body = payload(fixture::unrelated_event());

    assert!(matches!(
        service.verify_webhook(&body, Some("t=1,v1=00"), Utc::now()),
        Err(AppError::ConfigErr(_))
    ));
}

use std::collections::HashMap;

use super::*;
use crate::server::testing::{STRIPE_CANCEL_URL, STRIPE_PRICE_ID, STRIPE_SUCCESS_URL};

/// Tests creating a checkout session.
///
/// Verifies the form sent to Stripe: subscription mode, card payments, one unit of the
/// configured price, the redirect URLs and the Discord id as client reference.
///
/// Expected: Ok(checkout url)
#[tokio::test]
async fn creates_checkout_session() {
    let test = TestBuilder::new().with_stripe().build().await;
    let stripe = test.stripe();
    stripe.serve_checkout("https://checkout.stripe.test/c/pay/cs_test_a1b2c3").await;
    let config = test_config(&test);
    let http_client = reqwest::Client::new();
    let service = StripeService::new(&http_client, &config.stripe);

    let url = service.create_checkout_session("u1").await.unwrap();

    assert_eq!(url, "https://checkout.stripe.test/c/pay/cs_test_a1b2c3");
    let requests = stripe.checkout_requests().await;
    assert_eq!(requests.len(), 1);
    let form: HashMap<String, String> = requests[0].iter().cloned().collect();
    assert_eq!(form["mode"], "subscription");
    assert_eq!(form["payment_method_types[0]"], "card");
    assert_eq!(form["line_items[0][price]"], STRIPE_PRICE_ID);
    assert_eq!(form["line_items[0][quantity]"], "1");
    assert_eq!(
        form["success_url"],
        format!("{STRIPE_SUCCESS_URL}?session_id={{CHECKOUT_SESSION_ID}}")
    );
    assert_eq!(form["cancel_url"], STRIPE_CANCEL_URL);
    assert_eq!(form["client_reference_id"], "u1");
}

/// Tests a checkout request refused by Stripe.
///
/// Expected: Err(StripeError::Api) with Stripe's status and message
#[tokio::test]
async fn stripe_rejection_is_api_error() {
    let test = TestBuilder::new().with_stripe().build().await;
    test.stripe().reject_checkout(400, "No such price: 'price_test_premium'").await;
    let config = test_config(&test);
    let http_client = reqwest::Client::new();
    let service = StripeService::new(&http_client, &config.stripe);

    let result = service.create_checkout_session("u1").await;

    match result {
        Err(AppError::StripeErr(StripeError::Api { status, message })) => {
            assert_eq!(status, 400);
            assert_eq!(message, "No such price: 'price_test_premium'");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

/// Tests checkout without Stripe configured.
///
/// Expected: Err(ConfigErr) naming every missing Stripe setting
#[tokio::test]
async fn requires_stripe_settings() {
    let test = TestBuilder::new().build().await;
    let config = test_config(&test);
    let http_client = reqwest::Client::new();
    let service = StripeService::new(&http_client, &config.stripe);

    let result = service.create_checkout_session("u1").await;

    match result {
        Err(AppError::ConfigErr(ConfigError::MissingEnvVars(missing))) => assert_eq!(
            missing,
            vec![
                "STRIPE_API_KEY",
                "STRIPE_PRICE_ID",
                "STRIPE_SUCCESS_URL",
                "STRIPE_CANCEL_URL"
            ]
        ),
        other => panic!("unexpected result: {other:?}"),
    }
}

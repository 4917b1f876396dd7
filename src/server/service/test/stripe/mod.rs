use super::*;
use crate::server::service::stripe::StripeService;

mod checkout;
mod webhook;

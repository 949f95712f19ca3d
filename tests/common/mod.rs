use serde_json::{Value, json};
use tapbuy_alma::domain::request::PaymentRequest;

pub const SHOP_RETURN: &str = "https://shop.test/alma/payment/return";
pub const SHOP_CANCEL: &str = "https://shop.test/alma/payment/cancel";
pub const SHOP_FAILURE: &str = "https://shop.test/alma/payment/failure";

/// A request shaped like the one the monthly-installment builder produces.
pub fn alma_request() -> PaymentRequest {
    serde_json::from_value(json!({
        "payment": {
            "purchase_amount": 29900,
            "installments_count": 4,
            "return_url": SHOP_RETURN,
            "customer_cancel_url": SHOP_CANCEL,
            "failure_return_url": SHOP_FAILURE,
            "ipn_callback_url": "https://shop.test/alma/payment/ipn",
            "locale": "fr"
        },
        "customer": { "email": "jane@example.test" },
        "order": { "merchant_reference": "100000123" }
    }))
    .unwrap()
}

/// Serializes partner metadata the way the storefront stores it.
pub fn metadata(value: Value) -> String {
    serde_json::to_string(&value).unwrap()
}

/// One invocation line for the binary.
pub fn invocation_line(result: &PaymentRequest, raw_metadata: Option<&str>, partner: bool) -> String {
    let mut line = json!({ "result": result });
    if let Some(raw) = raw_metadata {
        line["subject"] = json!({ "payment": { "additional_information": { "tapbuy": raw } } });
    }
    if partner {
        line["headers"] = json!({ "X-Tapbuy-Call": "1" });
    }
    serde_json::to_string(&line).unwrap()
}

use cart_discount_extension::adapters::random::FixedRandom;
use cart_discount_extension::core::DiscountCodes;
use cart_discount_extension::{DiscountDecider, ExtensionResponse, RequestHandler};
use serde_json::{json, Value};
use std::sync::Arc;

const INVALID_INPUT_BODY: &str =
    r#"{"errors":[{"code":"InvalidInput","message":"Cart object not found."}]}"#;

fn forced_handler(draw: u32) -> RequestHandler {
    RequestHandler::new(DiscountDecider::new(Arc::new(FixedRandom::bucket(
        draw,
        DiscountDecider::BUCKETS,
    ))))
}

fn cart_input() -> Value {
    json!({ "resource": { "typeId": "cart", "obj": { "id": "c1" } } })
}

#[test]
fn test_scenario_a_no_discount() {
    let response = forced_handler(0).handle(&cart_input());

    assert_eq!(response.status_code(), 200);
    assert_eq!(response, ExtensionResponse::NoAction);
    assert_eq!(response.body_string().unwrap(), "");
}

#[test]
fn test_scenario_b_primary_code() {
    let response = forced_handler(1).handle(&cart_input());

    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response.body_string().unwrap(),
        r#"{"actions":[{"action":"addDiscountCode","code":"5%-OFF-ALL-LINE-ITEMS"}]}"#
    );
}

#[test]
fn test_secondary_code_only() {
    let response = forced_handler(2).handle(&cart_input());

    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response.body().unwrap(),
        Some(json!({ "actions": [{ "action": "addDiscountCode", "code": "$5-OFF-YOUR-CART" }] }))
    );
}

#[test]
fn test_scenario_c_both_codes_in_order() {
    let response = forced_handler(3).handle(&cart_input());

    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response.body_string().unwrap(),
        concat!(
            r#"{"actions":["#,
            r#"{"action":"addDiscountCode","code":"5%-OFF-ALL-LINE-ITEMS"},"#,
            r#"{"action":"addDiscountCode","code":"$5-OFF-YOUR-CART"}"#,
            r#"]}"#
        )
    );
}

#[test]
fn test_scenario_d_wrong_resource_type() {
    let input = json!({ "resource": { "typeId": "order", "obj": {} } });

    for draw in 0..DiscountDecider::BUCKETS {
        let response = forced_handler(draw).handle(&input);
        assert_eq!(response.status_code(), 400);
        assert_eq!(response.body_string().unwrap(), INVALID_INPUT_BODY);
    }
}

#[test]
fn test_scenario_e_empty_body() {
    let handler = forced_handler(1);

    for response in [handler.handle(&json!({})), handler.handle_bytes(b"")] {
        assert_eq!(response.status_code(), 400);
        assert_eq!(response.body_string().unwrap(), INVALID_INPUT_BODY);
    }
}

#[test]
fn test_invalid_input_is_idempotent() {
    let handler = forced_handler(3);
    let input = json!({ "resource": { "typeId": "cart", "obj": null } });

    let first = handler.handle(&input);
    let second = handler.handle(&input);
    assert_eq!(first, second);
    assert_eq!(first.body_string().unwrap(), second.body_string().unwrap());
}

#[test]
fn test_unusual_shapes_never_panic() {
    let handler = forced_handler(3);

    let bodies: [&[u8]; 7] = [
        b"null",
        b"[]",
        b"42",
        b"\"cart\"",
        br#"{"resource":[]}"#,
        br#"{"resource":{"typeId":["cart"],"obj":{}}}"#,
        br#"{"body":{"resource":{"typeId":"cart","obj":{}}}}"#,
    ];

    for raw in bodies {
        assert_eq!(handler.handle_bytes(raw).status_code(), 400);
    }
}

#[test]
fn test_any_non_null_cart_is_accepted() {
    let handler = forced_handler(1);

    for obj in [json!({}), json!([]), json!("opaque"), json!(0), json!(false)] {
        let input = json!({ "resource": { "typeId": "cart", "obj": obj } });
        assert_eq!(handler.handle(&input).status_code(), 200);
    }
}

#[test]
fn test_configured_codes_are_used() {
    let handler = RequestHandler::new(DiscountDecider::with_codes(
        Arc::new(FixedRandom::bucket(3, DiscountDecider::BUCKETS)),
        DiscountCodes {
            primary: "TEN-OFF".to_string(),
            secondary: "FREE-GIFT".to_string(),
        },
    ));

    let response = handler.handle(&cart_input());
    let codes: Vec<&str> = response.actions().iter().map(|a| a.code.as_str()).collect();
    assert_eq!(codes, vec!["TEN-OFF", "FREE-GIFT"]);
}

//! End-to-end tests for the emoji picker plugin over a method channel.
//!
//! A fake glyph probe stands in for the system fonts so results are the same
//! on every machine.

use std::collections::HashSet;

use emoji_picker::app::run_channel;
use emoji_picker::{EmojiPickerHandler, EmojiPickerPlugin, GlyphAvailabilityChecker, Invocation};
use emoji_picker_channel::{MethodCall, MethodCallHandler, MethodChannel, MethodResult, Plugin};
use emoji_picker_fonts::GlyphProbe;
use serde_json::{Value, json};

/// Probe that renders a fixed set of candidates.
struct FakeProbe(HashSet<&'static str>);

impl GlyphProbe for FakeProbe {
    fn supports_glyph(&self, candidate: &str) -> bool {
        self.0.contains(candidate)
    }
}

fn emoji_plugin() -> EmojiPickerPlugin<FakeProbe> {
    let probe = FakeProbe(["\u{1F600}", "\u{1F980}", "\u{1F1FA}\u{1F1F8}"].into());
    EmojiPickerPlugin::new(GlyphAvailabilityChecker::new(probe), "TestOS 1.0")
}

fn request(id: u64, method: &str, params: Value) -> String {
    json!({"jsonrpc": "2.0", "id": id, "method": method, "params": params}).to_string()
}

fn exchange(plugin: &mut EmojiPickerPlugin<FakeProbe>, lines: &[String]) -> Vec<Value> {
    let input = lines.join("\n") + "\n";
    let mut output = Vec::new();
    run_channel("emoji_picker", plugin, input.as_bytes(), &mut output);
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn test_is_available_over_channel() {
    let mut plugin = emoji_plugin();
    let responses = exchange(
        &mut plugin,
        &[
            request(1, "isAvailable", json!({"emoji": "\u{1F600}"})),
            request(2, "isAvailable", json!({"emoji": "\u{FFFF}"})),
            request(3, "isAvailable", json!({"emoji": "\u{1F1FA}\u{1F1F8}"})),
        ],
    );
    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0]["result"], true);
    assert_eq!(responses[1]["result"], false);
    assert_eq!(responses[2]["result"], true);
}

#[test]
fn test_check_availability_over_channel() {
    let mut plugin = emoji_plugin();
    let responses = exchange(
        &mut plugin,
        &[request(
            7,
            "checkAvailability",
            json!({"emoji": {"a": "\u{1F600}", "b": "\u{FFFF}"}}),
        )],
    );
    assert_eq!(responses[0]["id"], 7);
    assert_eq!(responses[0]["result"], json!({"a": "\u{1F600}"}));
}

#[test]
fn test_check_availability_extremes() {
    let mut plugin = emoji_plugin();
    let all = json!({"smile": "\u{1F600}", "crab": "\u{1F980}"});
    let responses = exchange(
        &mut plugin,
        &[
            request(1, "checkAvailability", json!({"emoji": all.clone()})),
            request(2, "checkAvailability", json!({"emoji": {"x": "\u{FFFF}", "y": ""}})),
            request(3, "checkAvailability", json!({"emoji": {}})),
        ],
    );
    assert_eq!(responses[0]["result"], all);
    assert_eq!(responses[1]["result"], json!({}));
    assert_eq!(responses[2]["result"], json!({}));
}

#[test]
fn test_platform_version_over_channel() {
    let mut plugin = emoji_plugin();
    let responses = exchange(&mut plugin, &[request(1, "getPlatformVersion", Value::Null)]);
    assert_eq!(responses[0]["result"], "TestOS 1.0");
}

#[test]
fn test_unknown_method_is_never_success() {
    let mut plugin = emoji_plugin();
    let responses = exchange(
        &mut plugin,
        &[
            request(1, "getEmojiName", json!({"emoji": "\u{1F600}"})),
            request(2, "", Value::Null),
        ],
    );
    for response in &responses {
        assert!(response.get("result").is_none(), "{response}");
        assert_eq!(response["error"]["code"], -32601);
        assert!(
            response["error"]["message"]
                .as_str()
                .unwrap()
                .starts_with("Method not implemented")
        );
    }
}

#[test]
fn test_malformed_arguments_are_labeled_errors() {
    let mut plugin = emoji_plugin();
    let responses = exchange(
        &mut plugin,
        &[
            request(1, "isAvailable", json!({})),
            request(2, "checkAvailability", json!({"emoji": ["\u{1F600}"]})),
            // A good call after bad ones still works
            request(3, "isAvailable", json!({"emoji": "\u{1F980}"})),
        ],
    );
    assert_eq!(responses[0]["error"]["code"], -32602);
    assert!(
        responses[0]["error"]["message"]
            .as_str()
            .unwrap()
            .contains("invalid arguments for 'isAvailable'")
    );
    assert_eq!(responses[1]["error"]["code"], -32602);
    assert_eq!(responses[2]["result"], true);
}

#[test]
fn test_unsupported_platform_degrades_to_false() {
    let mut plugin = EmojiPickerPlugin::new(
        GlyphAvailabilityChecker::<FakeProbe>::detect(|| Err("probe entry point missing")),
        "TestOS 1.0",
    );
    let responses = exchange(
        &mut plugin,
        &[
            request(1, "isAvailable", json!({"emoji": "\u{1F600}"})),
            request(2, "checkAvailability", json!({"emoji": {"a": "\u{1F600}"}})),
        ],
    );
    assert_eq!(responses[0]["result"], false);
    assert_eq!(responses[1]["result"], json!({}));
}

#[test]
fn test_attach_and_detach_lifecycle() {
    let mut plugin = emoji_plugin();
    let mut channel = MethodChannel::new("emoji_picker");
    let call = MethodCall::new("isAvailable", json!({"emoji": "\u{1F600}"}));

    plugin.on_attached(&mut channel);
    assert!(channel.has_handler());
    assert_eq!(channel.invoke(&call), MethodResult::Success(json!(true)));

    plugin.on_detached(&mut channel);
    assert!(!channel.has_handler());
    assert!(!plugin.is_holding_checker());
    assert_eq!(channel.invoke(&call), MethodResult::NotImplemented);

    // Re-attaching after detach does not bind a handler
    plugin.on_attached(&mut channel);
    assert!(!channel.has_handler());
}

#[test]
fn test_handler_executes_invocations_directly() {
    let checker = std::sync::Arc::new(GlyphAvailabilityChecker::new(FakeProbe(
        ["\u{1F600}"].into(),
    )));
    let handler = EmojiPickerHandler::new(checker, "TestOS".to_string());

    assert_eq!(
        handler.execute(Invocation::GetPlatformVersion),
        MethodResult::Success(json!("TestOS"))
    );
    assert_eq!(
        handler.on_method_call(&MethodCall::new("isAvailable", json!({"emoji": "x"}))),
        MethodResult::Success(json!(false))
    );
}

//! Render context: the key/value mapping substituted into templates.
//!
//! The context is an *ordered* map (insertion order is preserved, which
//! matters for the JSON export of an artifact's configuration). Values are
//! ordinary JSON values — strings, integers, booleans, and lists — so a
//! retained copy can be serialized verbatim later.
//!
//! Substitution is plain `{{key}}` expansion: unknown placeholders render as
//! empty, extra context keys are ignored. That is the whole engine; there are
//! no loops or conditionals, artifacts derive any repeated blocks (EXPOSE
//! lines, compose service stanzas) as pre-built string values before
//! rendering.

use serde_json::Value;

/// Ordered string → value mapping supplied to a template.
///
/// `serde_json`'s map type with the `preserve_order` feature keeps keys in
/// insertion order.
pub type Context = serde_json::Map<String, Value>;

/// Substitute `{{key}}` placeholders in `body` with values from `ctx`.
///
/// Placeholders with no matching key expand to the empty string. Whitespace
/// inside the braces is tolerated (`{{ base_image }}` works). An unclosed
/// `{{` is emitted literally.
pub fn render(body: &str, ctx: &Context) -> String {
    let mut out = String::with_capacity(body.len());
    let mut rest = body;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        match after.find("}}") {
            Some(close) => {
                let key = after[..close].trim();
                if let Some(value) = ctx.get(key) {
                    out.push_str(&value_to_string(value));
                }
                // unknown key: render as empty
                rest = &after[close + 2..];
            }
            None => {
                // no closing braces; keep the rest verbatim
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Render a single context value as template text.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .iter()
            .map(value_to_string)
            .collect::<Vec<_>>()
            .join(" "),
        Value::Null => String::new(),
        Value::Object(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ctx(pairs: &[(&str, Value)]) -> Context {
        let mut c = Context::new();
        for (k, v) in pairs {
            c.insert((*k).to_string(), v.clone());
        }
        c
    }

    #[test]
    fn substitutes_string_values() {
        let c = ctx(&[("base_image", json!("ubuntu:20.04"))]);
        assert_eq!(render("FROM {{base_image}}", &c), "FROM ubuntu:20.04");
    }

    #[test]
    fn substitutes_numbers_and_bools() {
        let c = ctx(&[("count", json!(3)), ("with_network", json!(true))]);
        assert_eq!(render("{{count}} {{with_network}}", &c), "3 true");
    }

    #[test]
    fn unknown_placeholder_renders_empty() {
        let c = Context::new();
        assert_eq!(render("a{{missing}}b", &c), "ab");
    }

    #[test]
    fn extra_keys_are_ignored() {
        let c = ctx(&[("used", json!("x")), ("unused", json!("y"))]);
        assert_eq!(render("{{used}}", &c), "x");
    }

    #[test]
    fn whitespace_inside_braces_is_tolerated() {
        let c = ctx(&[("name", json!("web"))]);
        assert_eq!(render("{{ name }}", &c), "web");
    }

    #[test]
    fn unclosed_braces_pass_through() {
        let c = Context::new();
        assert_eq!(render("tail {{oops", &c), "tail {{oops");
    }

    #[test]
    fn lists_join_with_spaces() {
        let c = ctx(&[("ports", json!([5050, 8080]))]);
        assert_eq!(render("{{ports}}", &c), "5050 8080");
    }

    #[test]
    fn repeated_placeholders_all_expand() {
        let c = ctx(&[("x", json!("v"))]);
        assert_eq!(render("{{x}}-{{x}}", &c), "v-v");
    }
}

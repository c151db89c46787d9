//! FIXML order-envelope transcoder.
//!
//! Order submission posts a FIXML document: a single `FIXML` root carrying
//! the protocol namespace, with the caller's order body serialized as nested
//! elements. No XML declaration is emitted. The output is opaque to the rest
//! of the client and is never parsed back.

use serde_json::Value;

/// Namespace attribute required on the FIXML root element.
pub const FIXML_NAMESPACE: &str = "http://www.fixprotocol.org/FIXML-5-0-SP2";

/// Wrap a caller-supplied order body in the FIXML envelope.
///
/// Objects become nested elements keyed by field name, arrays repeat the
/// enclosing element, and scalars become escaped text content.
pub fn envelope(order: &Value) -> String {
    let mut out = String::new();
    out.push_str("<FIXML xmlns=\"");
    out.push_str(FIXML_NAMESPACE);
    out.push_str("\">");
    write_body(&mut out, order);
    out.push_str("</FIXML>");
    out
}

fn write_body(out: &mut String, value: &Value) {
    match value {
        Value::Object(fields) => {
            for (name, field) in fields {
                write_element(out, name, field);
            }
        }
        other => write_text(out, other),
    }
}

fn write_element(out: &mut String, name: &str, value: &Value) {
    match value {
        // Arrays repeat the enclosing element once per item.
        Value::Array(items) => {
            for item in items {
                write_element(out, name, item);
            }
        }
        Value::Object(_) => {
            out.push('<');
            out.push_str(name);
            out.push('>');
            write_body(out, value);
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        other => {
            out.push('<');
            out.push_str(name);
            out.push('>');
            write_text(out, other);
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
    }
}

fn write_text(out: &mut String, value: &Value) {
    match value {
        Value::Null => {}
        Value::String(s) => out.push_str(&escape(s)),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        // Arrays and objects are handled by the callers above.
        other => out.push_str(&escape(&other.to_string())),
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_root_carries_namespace_and_no_declaration() {
        let body = envelope(&json!({"Side": "1"}));
        assert!(body.starts_with("<FIXML xmlns=\"http://www.fixprotocol.org/FIXML-5-0-SP2\">"));
        assert!(body.ends_with("</FIXML>"));
        assert!(!body.contains("<?xml"));
    }

    #[test]
    fn test_scalar_field_becomes_nested_element() {
        let body = envelope(&json!({"Side": "1"}));
        assert!(body.contains("<Side>1</Side>"));
    }

    #[test]
    fn test_nested_order_body() {
        let body = envelope(&json!({
            "Order": {
                "Acct": "12345",
                "Side": "1",
                "Instrmt": {"Sym": "AAPL", "SecTyp": "CS"}
            }
        }));
        assert!(body.contains("<Order>"));
        assert!(body.contains("<Acct>12345</Acct>"));
        assert!(body.contains("<Instrmt>"));
        assert!(body.contains("<Sym>AAPL</Sym>"));
        assert!(body.contains("<SecTyp>CS</SecTyp>"));
        assert!(body.contains("</Order>"));
    }

    #[test]
    fn test_array_repeats_element() {
        let body = envelope(&json!({"Leg": [{"Sym": "AAPL"}, {"Sym": "MSFT"}]}));
        assert!(body.contains("<Leg><Sym>AAPL</Sym></Leg><Leg><Sym>MSFT</Sym></Leg>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let body = envelope(&json!({"Note": "a<b&c"}));
        assert!(body.contains("<Note>a&lt;b&amp;c</Note>"));
    }

    #[test]
    fn test_numbers_and_nulls() {
        let body = envelope(&json!({"Qty": 100, "Px": 12.5, "Memo": null}));
        assert!(body.contains("<Qty>100</Qty>"));
        assert!(body.contains("<Px>12.5</Px>"));
        assert!(body.contains("<Memo></Memo>"));
    }
}

//! `${var}` template interpolation over scoped variables.
//!
//! Supported forms: `$var`, `${var}`, `${var.path.to.value}` and
//! `${var:format}` where format is `text`, `raw` or `percentencode`.
//! References that do not resolve are left in place.

use crate::core::{ScopedVar, ScopedVars};
use serde_json::Value as Json;

pub fn interpolate(template: &str, vars: &ScopedVars) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('$') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        if let Some(braced) = after.strip_prefix('{') {
            if let Some(end) = braced.find('}') {
                let expr = &braced[..end];
                match resolve_expr(expr, vars) {
                    Some(text) => out.push_str(&text),
                    None => out.push_str(&rest[start..start + end + 3]),
                }
                rest = &braced[end + 1..];
                continue;
            }
        } else {
            let len = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            if len > 0 {
                let name = &after[..len];
                match vars.get(name) {
                    Some(var) => out.push_str(&render_var(var)),
                    None => out.push_str(&rest[start..start + len + 1]),
                }
                rest = &after[len..];
                continue;
            }
        }

        out.push('$');
        rest = after;
    }

    out.push_str(rest);
    out
}

fn resolve_expr(expr: &str, vars: &ScopedVars) -> Option<String> {
    let (path, format) = match expr.split_once(':') {
        Some((path, format)) => (path, Some(format)),
        None => (expr, None),
    };

    let mut segments = path.split('.');
    let var = vars.get(segments.next()?)?;
    let rest: Vec<&str> = segments.collect();

    let text = if rest.is_empty() {
        if format == Some("text") {
            var.text.clone()
        } else {
            render_var(var)
        }
    } else {
        let mut current = &var.value;
        for key in rest {
            current = match current {
                Json::Object(map) => map.get(key)?,
                Json::Array(items) => items.get(key.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        match current {
            Json::Object(map) => match map.get("text") {
                Some(text) => render_json(text),
                None => render_json(current),
            },
            other => render_json(other),
        }
    };

    Some(match format {
        Some("percentencode") => percent_encode(&text),
        _ => text,
    })
}

fn render_var(var: &ScopedVar) -> String {
    match &var.value {
        Json::Null | Json::Object(_) => var.text.clone(),
        other => render_json(other),
    }
}

/// Plain text for a JSON value. Whole numbers drop their fraction.
pub fn render_json(value: &Json) -> String {
    match value {
        Json::Null => String::new(),
        Json::Bool(b) => b.to_string(),
        Json::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        Json::String(s) => s.clone(),
        Json::Array(items) => items.iter().map(render_json).collect::<Vec<_>>().join(","),
        Json::Object(_) => value.to_string(),
    }
}

fn percent_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vars() -> ScopedVars {
        let mut vars = ScopedVars::new();
        vars.insert("host".to_string(), ScopedVar::new("web-1", "web-1"));
        vars.insert(
            "__value".to_string(),
            ScopedVar::new("Value", json!({"raw": 42.0, "text": "42 ms"})),
        );
        vars.insert(
            "__data".to_string(),
            ScopedVar::new("Data", json!({"fields": {"label": {"text": "a b", "raw": "a b"}}})),
        );
        vars
    }

    #[test]
    fn test_simple_and_braced_forms() {
        assert_eq!(interpolate("/d?h=$host", &vars()), "/d?h=web-1");
        assert_eq!(interpolate("/d?h=${host}&x=1", &vars()), "/d?h=web-1&x=1");
    }

    #[test]
    fn test_paths_into_values() {
        assert_eq!(interpolate("${__value.raw}", &vars()), "42");
        assert_eq!(interpolate("${__value.text}", &vars()), "42 ms");
        assert_eq!(interpolate("${__data.fields.label}", &vars()), "a b");
        assert_eq!(interpolate("${__data.fields.label:percentencode}", &vars()), "a%20b");
    }

    #[test]
    fn test_unresolved_references_are_kept() {
        assert_eq!(interpolate("$missing/${nope.x}", &vars()), "$missing/${nope.x}");
        assert_eq!(interpolate("cost: 5$", &vars()), "cost: 5$");
    }
}

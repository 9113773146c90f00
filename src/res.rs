#[macro_export]
macro_rules! include_res {
    (bytes, $p:expr) => {
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
    (str, $p:expr) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
}

/// Substitutes `{key}` placeholders in a single left-to-right pass over the
/// template. Substituted values are never rescanned, so a value containing
/// the literal text of another placeholder stays literal.
pub fn fill<S: AsRef<str>>(template: &str, values: &[(&str, S)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        if let Some(len) = rest[start..].find('}') {
            let key = &rest[start + 1..start + len];
            if let Some((_, value)) = values.iter().find(|(k, _)| *k == key) {
                out.push_str(&rest[..start]);
                out.push_str(value.as_ref());
                rest = &rest[start + len + 1..];
                continue;
            }
        }
        out.push_str(&rest[..start + 1]);
        rest = &rest[start + 1..];
    }

    out.push_str(rest);
    out
}

/// Minimal HTML escape for user-supplied text dropped into a template.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

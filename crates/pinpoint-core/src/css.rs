//! Selector text construction.

/// Quote an attribute value as a single-quoted CSS string.
pub fn quote_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\a "),
            '\r' => out.push_str("\\d "),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Escape a name for use as a CSS identifier, e.g. `svg:rect` becomes
/// `svg\:rect`. Digits in leading position and control characters are
/// written as hex escapes.
pub fn escape_ident(ident: &str) -> String {
    if ident == "-" {
        return "\\-".to_string();
    }

    let mut out = String::with_capacity(ident.len());
    let dashed = ident.starts_with('-');
    for (i, c) in ident.chars().enumerate() {
        // the first character after an optional leading dash starts the name
        let name_start = i == 0 || (i == 1 && dashed);
        let plain = c.is_ascii_alphanumeric() || c == '_' || !c.is_ascii() || c == '-';

        if c.is_control() || (name_start && c.is_ascii_digit()) {
            out.push_str(&format!("\\{:x} ", c as u32));
        } else if plain && !(i == 1 && dashed && c == '-') {
            out.push(c);
        } else {
            out.push('\\');
            out.push(c);
        }
    }
    out
}

/// `tag[attr='value']`
pub fn attribute_equals(tag: &str, attribute: &str, value: &str) -> String {
    format!("{}[{}={}]", escape_ident(tag), attribute, quote_value(value))
}

/// `tag[attr*='value']`
pub fn attribute_contains(tag: &str, attribute: &str, value: &str) -> String {
    format!("{}[{}*={}]", escape_ident(tag), attribute, quote_value(value))
}

/// Append a `:nth-of-type(n)` qualifier.
pub fn nth_of_type(selector: &str, position: usize) -> String {
    format!("{}:nth-of-type({})", selector, position)
}

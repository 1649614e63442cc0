use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::{
    borrow::Cow,
    str::Utf8Error,
    time::{SystemTime, UNIX_EPOCH},
};

/// Characters left as-is by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub(crate) fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

pub(crate) fn decode_component(input: &str) -> Result<Cow<'_, str>, Utf8Error> {
    percent_decode_str(input).decode_utf8()
}

pub(crate) fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

pub(crate) fn now_millis() -> u64 {
    // a clock set before the epoch yields 0, which is still a valid cache buster
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

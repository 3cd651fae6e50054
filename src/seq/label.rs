// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// FastA label (header) lines: recognition, payload, size annotation, and new labels. Works on
// bytes, since labels are not guaranteed to be UTF-8.

pub const LABEL_MARKER: u8 = b'>';
pub const FIELD_SEPARATOR: u8 = b';';
pub const SIZE_TAG: &[u8] = b"size=";

pub fn is_label(line: &[u8]) -> bool {
    line.first() == Some(&LABEL_MARKER)
}

/// Returns the label text (everything after the leading '>', ASCII-whitespace-trimmed), or None
/// if `line` is not a label line.
pub fn label_payload(line: &[u8]) -> Option<&[u8]> {
    if is_label(line) {
        Some(line[1..].trim_ascii())
    } else {
        None
    }
}

/// First ';'-separated field of `payload` that starts with "size=", returned verbatim (tag
/// included).
pub fn find_size_field(payload: &[u8]) -> Option<&[u8]> {
    payload
        .split(|&b| b == FIELD_SEPARATOR)
        .find(|field| field.starts_with(SIZE_TAG))
}

pub fn format_label(prefix: &str, number: usize, size: Option<&[u8]>) -> Vec<u8> {
    let mut label = vec![LABEL_MARKER];
    label.extend_from_slice(prefix.as_bytes());
    label.extend_from_slice(number.to_string().as_bytes());
    if let Some(field) = size {
        label.push(FIELD_SEPARATOR);
        label.extend_from_slice(field);
    }
    label
}

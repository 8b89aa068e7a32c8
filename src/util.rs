use std::borrow::Cow;

#[doc(hidden)]
pub fn normalize_lower(value: &str) -> String {
    lowercase_if_needed(value).into_owned()
}

/// Lower-cases `value`, borrowing it untouched when it has no upper-case characters.
pub(crate) fn lowercase_if_needed(value: &str) -> Cow<'_, str> {
    if value.is_ascii() {
        if value.bytes().any(|byte| byte.is_ascii_uppercase()) {
            Cow::Owned(value.to_ascii_lowercase())
        } else {
            Cow::Borrowed(value)
        }
    } else {
        match lowercase_unicode_if_needed(value) {
            Some(lowered) => Cow::Owned(lowered),
            None => Cow::Borrowed(value),
        }
    }
}

pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

/// Splits a comma-separated header or configuration value into trimmed,
/// lower-cased entries. Empty entries are kept; callers decide whether they matter.
pub(crate) fn split_lowercase(value: &str) -> impl Iterator<Item = Cow<'_, str>> {
    value.split(',').map(|entry| lowercase_if_needed(entry.trim()))
}

fn lowercase_unicode_if_needed(value: &str) -> Option<String> {
    for (idx, ch) in value.char_indices() {
        if ch.is_uppercase() {
            let mut lowered = String::with_capacity(value.len());
            lowered.push_str(&value[..idx]);
            lowered.extend(ch.to_lowercase());

            let tail_start = idx + ch.len_utf8();
            for tail_ch in value[tail_start..].chars() {
                if tail_ch.is_uppercase() {
                    lowered.extend(tail_ch.to_lowercase());
                } else {
                    lowered.push(tail_ch);
                }
            }

            return Some(lowered);
        }
    }

    None
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;

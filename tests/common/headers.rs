use cors_filter::Headers;

pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    header_value(headers, name).is_some()
}

pub fn cors_header_names(headers: &Headers) -> Vec<&str> {
    headers
        .keys()
        .map(String::as_str)
        .filter(|name| name.to_ascii_lowercase().starts_with("access-control-"))
        .collect()
}

use super::*;

mod normalize_lower {
    use super::*;

    #[test]
    fn should_return_ascii_lowercase_when_input_ascii_then_use_fast_path() {
        let result = normalize_lower("HeAdEr");

        assert_eq!(result, "header");
    }

    #[test]
    fn should_return_unicode_lowercase_when_input_unicode_then_preserve_characters() {
        let result = normalize_lower("TÉST");

        assert_eq!(result, "tést");
    }

    #[test]
    fn should_return_ascii_lowercase_when_input_empty_then_return_empty_string() {
        let result = normalize_lower("");

        assert_eq!(result, "");
    }
}

mod lowercase_if_needed {
    use super::*;

    #[test]
    fn should_borrow_when_value_already_lowercase_then_skip_allocation() {
        let result = lowercase_if_needed("http://bar.com");

        assert!(matches!(result, Cow::Borrowed("http://bar.com")));
    }

    #[test]
    fn should_own_when_value_has_uppercase_then_return_lowered_copy() {
        let result = lowercase_if_needed("HTTP://Bar.com");

        assert!(matches!(result, Cow::Owned(ref lowered) if lowered == "http://bar.com"));
    }

    #[test]
    fn should_borrow_when_unicode_value_has_no_uppercase_then_skip_allocation() {
        let result = lowercase_if_needed("https://café.test");

        assert!(matches!(result, Cow::Borrowed(_)));
    }
}

mod split_lowercase {
    use super::*;

    #[test]
    fn should_trim_and_lowercase_when_entries_padded_then_return_normalized_entries() {
        let entries: Vec<_> = split_lowercase(" X-Custom1 , X-CUSTOM2").collect();

        assert_eq!(entries, vec!["x-custom1", "x-custom2"]);
    }

    #[test]
    fn should_keep_empty_entries_when_value_has_gaps_then_report_them() {
        let entries: Vec<_> = split_lowercase("a,,b,").collect();

        assert_eq!(entries, vec!["a", "", "b", ""]);
    }

    #[test]
    fn should_yield_single_empty_entry_when_value_empty_then_report_it() {
        let entries: Vec<_> = split_lowercase("").collect();

        assert_eq!(entries, vec![""]);
    }
}

mod is_http_token {
    use super::*;

    #[test]
    fn should_return_true_when_value_contains_valid_token_characters_then_accept_value() {
        assert!(is_http_token("X-Custom"));
        assert!(is_http_token("token123"));
    }

    #[test]
    fn should_return_false_when_value_contains_invalid_character_then_reject_value() {
        assert!(!is_http_token("Header:Value"));
        assert!(!is_http_token(" space"));
    }

    #[test]
    fn should_return_false_when_value_empty_then_reject_value() {
        assert!(!is_http_token(""));
    }
}

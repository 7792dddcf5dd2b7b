//! Tests for modifier registry and dispatch
//!
//! This module covers name resolution, the built-in case modifiers and every
//! `FORMAT` sub-behavior, including the failure kinds each one reports.
//!
//! Copyright (c) 2025 Fieldmod Team
//! Licensed under the Apache-2.0 license

#[cfg(test)]
mod tests {
    use super::super::{ModifierContext, ModifierKind, ModifierRegistry};
    use crate::error::{Error, ErrorKind};
    use crate::settings::{EngineSettings, SizeUnits};
    use crate::value::{Scalar, Value};
    use chrono::{TimeZone, Utc};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn run(name: &str, attribute: &str, arguments: &[&str], value: Scalar) -> crate::Result<Value> {
        run_with(EngineSettings::default(), name, attribute, arguments, value)
    }

    fn run_with(
        settings: EngineSettings,
        name: &str,
        attribute: &str,
        arguments: &[&str],
        value: Scalar,
    ) -> crate::Result<Value> {
        let arguments = args(arguments);
        let ctx = ModifierContext::new(name, attribute, &arguments, &settings);
        ModifierRegistry::global().dispatch(&ctx, &value)
    }

    fn text(s: &str) -> Scalar {
        Scalar::String(s.to_string())
    }

    #[test]
    fn test_registry_holds_builtins() {
        let registry = ModifierRegistry::global();
        assert_eq!(registry.len(), 3);
        for kind in ModifierKind::ALL {
            assert_eq!(registry.lookup(kind.as_str()).map(|m| m.kind()), Some(kind));
        }
    }

    #[test]
    fn test_global_registry_is_built_once() {
        let first = ModifierRegistry::global() as *const ModifierRegistry;
        let second = ModifierRegistry::global() as *const ModifierRegistry;
        assert_eq!(first, second);
    }

    #[test]
    fn test_names_are_case_insensitive() {
        assert_eq!(ModifierKind::from_name("upper"), Some(ModifierKind::Upper));
        assert_eq!(ModifierKind::from_name("LoWeR"), Some(ModifierKind::Lower));
        assert_eq!(ModifierKind::from_name("Format"), Some(ModifierKind::Format));
        assert_eq!(ModifierKind::from_name(""), None);
        assert_eq!(ModifierKind::from_name("UPPER "), None);
    }

    #[test]
    fn test_upper_and_lower() {
        assert_eq!(run("UPPER", "name", &[], text("abc")).unwrap(), Value::from("ABC"));
        assert_eq!(run("lower", "name", &[], text("ABC")).unwrap(), Value::from("abc"));
        assert_eq!(run("upper", "title", &[], text("straße")).unwrap(), Value::from("STRASSE"));
    }

    #[test]
    fn test_case_modifier_type_mismatch() {
        let err = run("UPPER", "size", &[], Scalar::Int(3)).unwrap_err();
        match err {
            Error::TypeMismatch { modifier, expected, found } => {
                assert_eq!(modifier, "UPPER");
                assert_eq!(expected, "string");
                assert_eq!(found, "int");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_modifier_is_not_implemented() {
        for attribute in ["name", "size", "time", "anything"] {
            let err = run("FOO", attribute, &[], text("x")).unwrap_err();
            match err {
                Error::NotImplemented { name, attribute: attr } => {
                    assert_eq!(name, "FOO");
                    assert_eq!(attr, attribute);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }

        let err = run("", "name", &[], text("x")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotImplemented);
    }

    #[test]
    fn test_format_unknown_attribute_is_not_implemented() {
        let err = run("format", "colour", &["red"], text("x")).unwrap_err();
        match err {
            Error::NotImplemented { name, attribute } => {
                assert_eq!(name, "format");
                assert_eq!(attribute, "colour");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_format_name() {
        let result = run("FORMAT", "name", &["snake"], text("MonthlyReport v2")).unwrap();
        assert_eq!(result, Value::from("monthly_report_v2"));
    }

    #[test]
    fn test_format_name_unsupported_convention() {
        let err = run("FORMAT", "name", &["hungarian"], text("x")).unwrap_err();
        match err {
            Error::UnsupportedFormat { variant, attribute } => {
                assert_eq!(variant, "hungarian");
                assert_eq!(attribute, "name");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = run("FORMAT", "name", &[], text("x")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(run("FORMAT", "size", &["B"], text("12.5")).unwrap(), Value::from(12.5));
        assert_eq!(run("FORMAT", "size", &["KB"], text("2")).unwrap(), Value::from(2048.0));
        assert_eq!(run("FORMAT", "size", &["kb"], text("2")).unwrap(), Value::from(2048.0));
        assert_eq!(run("FORMAT", "size", &["MB"], text("1")).unwrap(), Value::from(1048576.0));
    }

    #[test]
    fn test_format_size_gb_legacy_factor() {
        let gb = run("FORMAT", "size", &["GB"], text("1")).unwrap();
        let mb = run("FORMAT", "size", &["MB"], text("1")).unwrap();
        assert_eq!(gb, Value::from(1048576.0));
        assert_eq!(gb, mb);
    }

    #[test]
    fn test_format_size_gb_binary_factor() {
        let settings = EngineSettings::default().with_size_units(SizeUnits::Binary);
        let gb = run_with(settings, "FORMAT", "size", &["GB"], text("1")).unwrap();
        assert_eq!(gb, Value::from(1073741824.0));
    }

    #[test]
    fn test_format_size_unsupported_unit() {
        let err = run("FORMAT", "size", &["TB"], text("1")).unwrap_err();
        match err {
            Error::UnsupportedFormat { variant, attribute } => {
                assert_eq!(variant, "TB");
                assert_eq!(attribute, "size");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = run("FORMAT", "size", &[], text("1")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
    }

    #[test]
    fn test_format_size_forwards_parse_error() {
        let err = run("FORMAT", "size", &["TB"], text("twelve")).unwrap_err();
        let expected = "twelve".parse::<f64>().unwrap_err().to_string();
        assert_eq!(err.kind(), ErrorKind::ParseNumber);
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_format_size_rejects_non_string() {
        let err = run("FORMAT", "size", &["KB"], Scalar::Float(2.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_format_time_iso() {
        let result = run("FORMAT", "time", &["ISO"], text("2020-01-02T15:04:05Z")).unwrap();
        let expected = Utc.with_ymd_and_hms(2020, 1, 2, 15, 4, 5).unwrap();
        assert_eq!(result.as_time().copied(), Some(expected.into()));
    }

    #[test]
    fn test_format_time_default_layout() {
        let result = run("FORMAT", "time", &[], text("Jan 02 2020 15 04")).unwrap();
        let expected = Utc.with_ymd_and_hms(2020, 1, 2, 15, 4, 0).unwrap();
        assert_eq!(result.as_time().copied(), Some(expected.into()));
    }

    #[test]
    fn test_format_time_forwards_parse_error() {
        let err = run("FORMAT", "time", &["ISO"], text("yesterday")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseTime);
    }

    #[test]
    fn test_format_time_default_layout_is_fixed_width() {
        for input in ["Jan 2 2020 15 04", "Jan0220201504"] {
            let err = run("FORMAT", "time", &[], text(input)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ParseTime, "{input}");
        }

        let err = run("FORMAT", "time", &["ISO"], text("2020-01-02 15:04:05Z")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseTime);
    }

    #[test]
    fn test_format_time_unix_weekday_is_not_checked_against_date() {
        let result = run("FORMAT", "time", &["UNIX"], text("Mon Jan  3 15:04:05 UTC 2020")).unwrap();
        let expected = Utc.with_ymd_and_hms(2020, 1, 3, 15, 4, 5).unwrap();
        assert_eq!(result.as_time().copied(), Some(expected.into()));
    }
}

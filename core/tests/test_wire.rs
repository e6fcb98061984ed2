mod common;

#[cfg(test)]
mod tests {
    use keyed_codec::batch::encode_all;
    use keyed_codec::codec::CodecConfig;
    use keyed_codec::document::{Scalar, SerializedDocument};
    use keyed_codec::registry::FieldKey;
    use keyed_codec::wire::{document_from_bytes, document_to_bytes, from_bytes, to_bytes, ParseCategory, WireConfig};

    use crate::common::{john_snow, john_snow_record};

    const JOHN_SNOW_JSON: &str =
        r#"[{"name":"John Snow","isFullTime":true,"hireDate":"2024-03-14T09:26:53.589+00:00"}]"#;

    fn john_snow_docs() -> Vec<SerializedDocument> {
        encode_all(&[john_snow()], &CodecConfig::default())
    }

// ## Serialize

    #[test]
    fn compact_output_is_exact() {
        let bytes = to_bytes(&john_snow_docs(), &WireConfig::default()).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), JOHN_SNOW_JSON);
    }

    #[test]
    fn both_representations_give_identical_bytes() {
        let cfg = CodecConfig::default();
        let from_record = to_bytes(&encode_all(&[john_snow_record()], &cfg), &WireConfig::default()).unwrap();
        let from_value = to_bytes(&encode_all(&[john_snow()], &cfg), &WireConfig::default()).unwrap();
        assert_eq!(from_record, from_value);
    }

    #[test]
    fn pretty_output_is_indented() {
        let bytes = to_bytes(&john_snow_docs(), &WireConfig::pretty()).unwrap();
        let expected = "[\n  {\n    \"name\": \"John Snow\",\n    \"isFullTime\": true,\n    \"hireDate\": \"2024-03-14T09:26:53.589+00:00\"\n  }\n]";
        assert_eq!(String::from_utf8(bytes).unwrap(), expected);
    }

    #[test]
    fn sorted_keys_option_orders_lexicographically() {
        let config = WireConfig::new(None, Some(true));
        let bytes = to_bytes(&john_snow_docs(), &config).unwrap();
        let parsed = from_bytes(&bytes).unwrap();
        let keys: Vec<&str> = parsed[0].keys().map(FieldKey::as_str).collect();
        assert_eq!(keys, vec!["hireDate", "isFullTime", "name"]);
    }

    #[test]
    fn empty_batch_is_empty_array() {
        assert_eq!(to_bytes(&[], &WireConfig::default()).unwrap(), b"[]");
        assert!(from_bytes(b"[]").unwrap().is_empty());
    }

    #[test]
    fn config_defaults() {
        let c = WireConfig::new(None, None);
        assert_eq!(c, WireConfig::default());
        assert!(!c.is_pretty());
        assert!(!c.is_sorted());
    }

// ## Parse

    #[test]
    fn parse_keeps_source_key_order() {
        let docs = from_bytes(br#"[{"z":1,"a":"x","m":false}]"#).unwrap();
        let keys: Vec<&str> = docs[0].keys().map(FieldKey::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
        assert_eq!(docs[0].get("z"), Some(&Scalar::Integer(1)));
        assert_eq!(docs[0].get("m"), Some(&Scalar::Bool(false)));
    }

    #[test]
    fn duplicate_key_later_value_wins_in_place() {
        let docs = from_bytes(br#"[{"a":1,"b":2,"a":3}]"#).unwrap();
        let entries: Vec<(&str, &Scalar)> = docs[0].iter().map(|(k, v)| (k.as_str(), v)).collect();
        assert_eq!(entries, vec![("a", &Scalar::Integer(3)), ("b", &Scalar::Integer(2))]);
    }

    #[test]
    fn round_trip_bytes_are_stable() {
        let docs = from_bytes(JOHN_SNOW_JSON.as_bytes()).unwrap();
        assert_eq!(docs, john_snow_docs());
        assert_eq!(to_bytes(&docs, &WireConfig::default()).unwrap(), JOHN_SNOW_JSON.as_bytes());
    }

    #[test]
    fn syntax_error_has_position() {
        let err = from_bytes(br#"[{"name": }]"#).unwrap_err();
        assert_eq!(err.category, ParseCategory::Syntax);
        assert_eq!(err.line, 1);
        assert!(err.column > 0);
        assert!(err.to_string().starts_with("syntax error at line 1 column"));
    }

    #[test]
    fn error_on_second_line_reports_line_two() {
        let err = from_bytes(b"[\n{\"name\": tru}]").unwrap_err();
        assert_eq!(err.line, 2);
    }

    #[test]
    fn truncated_input_is_eof() {
        let err = from_bytes(br#"[{"name":"John"#).unwrap_err();
        assert_eq!(err.category, ParseCategory::Eof);
    }

    #[test]
    fn non_scalar_values_are_data_errors() {
        for input in [
            &br#"[{"name":{"first":"John"}}]"#[..],
            &br#"[{"name":["John"]}]"#[..],
            &br#"[{"score":1.5}]"#[..],
            &br#"[{"name":null}]"#[..],
            &br#"[{"n":18446744073709551615}]"#[..],
            &br#"{"name":"John"}"#[..],
        ] {
            let err = from_bytes(input).unwrap_err();
            assert_eq!(err.category, ParseCategory::Data, "input: {}", String::from_utf8_lossy(input));
        }
    }

// ## Single document

    #[test]
    fn single_document_round_trip() {
        let doc = john_snow_docs().remove(0);
        let bytes = document_to_bytes(&doc, &WireConfig::default()).unwrap();
        assert_eq!(bytes.first(), Some(&b'{'));
        assert_eq!(document_from_bytes(&bytes).unwrap(), doc);
    }

    #[test]
    fn single_document_rejects_array() {
        assert!(document_from_bytes(JOHN_SNOW_JSON.as_bytes()).is_err());
    }
}

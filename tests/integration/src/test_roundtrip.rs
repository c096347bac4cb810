//! Encode/decode round-trip integration tests.

#[cfg(test)]
mod tests {
    use errwrap_model::{ErrorEntry, ErrorMapping};
    use errwrap_xml::{ErrorXmlAdapter, XmlAdapterConfig, XmlSerializable};
    use quick_xml::{Reader, Writer};

    use crate::{init_tracing, mapping_of, round_trip, with_empty_values};

    #[test]
    fn test_should_round_trip_name_and_age() {
        init_tracing();
        let mapping = mapping_of(&[("Name", "Required"), ("Age", "Must be a number")]);

        let xml = errwrap_xml::mapping_to_xml(&XmlAdapterConfig::default(), &mapping);
        assert_eq!(
            std::str::from_utf8(&xml).expect("valid UTF-8"),
            "<Error><Name>Required</Name><Age>Must be a number</Age></Error>"
        );

        let decoded = errwrap_xml::from_xml(&xml).expect("deserialization should succeed");
        assert_eq!(decoded, mapping);
    }

    #[test]
    fn test_should_preserve_entry_order() {
        let mapping = mapping_of(&[("c", "3"), ("a", "1"), ("b", "2")]);

        let decoded = round_trip(&mapping);
        let keys: Vec<_> = decoded.keys().collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
        assert_eq!(decoded, mapping);
    }

    #[test]
    fn test_should_round_trip_empty_mapping() {
        let decoded = round_trip(&ErrorMapping::new());
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_should_round_trip_keys_with_illegal_characters() {
        let mapping = mapping_of(&[
            ("first name", "Required"),
            ("field[0]", "Out of range"),
            ("1stField", "Invalid"),
            ("Orders[2].Lines[0].Sku", "Unknown SKU"),
            ("", "Object-level error"),
            ("_x0020_", "Looks like an escape"),
            ("user@example", "Bad address"),
        ]);

        assert_eq!(round_trip(&mapping), mapping);
    }

    #[test]
    fn test_should_round_trip_values_with_special_characters() {
        let mapping = mapping_of(&[
            ("Range", "Value must be < 1024 & > 0"),
            ("Quote", "She said \"no\" and 'maybe'"),
            ("Markup", "<b>not a tag</b>"),
            ("Padded", "  leading and trailing  "),
            ("Multiline", "line one\nline two"),
        ]);

        assert_eq!(round_trip(&mapping), mapping);
    }

    #[test]
    fn test_should_read_missing_values_as_empty_strings() {
        let mapping = ErrorMapping::from(vec![
            ErrorEntry::new("Name", "Required"),
            ErrorEntry::empty("Email"),
            ErrorEntry::new("Zip", ""),
        ]);

        let decoded = round_trip(&mapping);
        assert_eq!(decoded, with_empty_values(&mapping));
        assert_eq!(decoded.get("Email"), Some(""));
    }

    #[test]
    fn test_should_round_trip_duplicate_keys() {
        let mapping = mapping_of(&[("Name", "Required"), ("Name", "Too short"), ("Age", "Bad")]);
        assert_eq!(round_trip(&mapping), mapping);
    }

    #[test]
    fn test_should_round_trip_indented_document() {
        let mapping = mapping_of(&[("Name", "Required"), ("Age", "Must be a number")]);
        let config = XmlAdapterConfig::default()
            .with_xml_declaration(true)
            .with_indent(4);

        let xml = errwrap_xml::mapping_to_xml(&config, &mapping);
        let decoded = errwrap_xml::from_xml(&xml).expect("deserialization should succeed");
        assert_eq!(decoded, mapping);
    }

    #[test]
    fn test_should_round_trip_through_caller_owned_container() {
        let mapping = mapping_of(&[("first name", "Required"), ("Age", "a < b")]);
        let adapter = ErrorXmlAdapter::new(mapping.clone());

        let mut buf = Vec::new();
        let mut writer = Writer::new(&mut buf);
        writer
            .create_element("ModelState")
            .write_inner_content(|w| adapter.write_xml(w))
            .expect("write should succeed");

        let mut reader = Reader::from_reader(buf.as_slice());
        let mut decoded = ErrorXmlAdapter::default();
        decoded.read_xml(&mut reader).expect("read should succeed");
        assert_eq!(decoded.into_inner(), mapping);
    }

    #[test]
    fn test_should_reencode_decoded_document_identically() {
        let xml = b"<Error><first_x0020_name>Required</first_x0020_name><_x0031_st>a &amp; b</_x0031_st></Error>";

        let decoded = errwrap_xml::from_xml(xml).expect("deserialization should succeed");
        let reencoded = errwrap_xml::mapping_to_xml(&XmlAdapterConfig::default(), &decoded);
        assert_eq!(reencoded.as_slice(), &xml[..]);
    }
}

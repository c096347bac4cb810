//! Malformed input integration tests.

#[cfg(test)]
mod tests {
    use errwrap_xml::{ErrorXmlAdapter, XmlError, XmlSerializable};
    use quick_xml::Reader;

    use crate::init_tracing;

    #[test]
    fn test_should_fail_on_unclosed_child_element() {
        init_tracing();
        let result = errwrap_xml::from_xml(b"<Error><Name>Required</Error>");
        assert!(result.is_err(), "unclosed child should fail");
    }

    #[test]
    fn test_should_fail_on_truncated_document() {
        let result = errwrap_xml::from_xml(b"<Error><Name>Required</Name><Age>Must");
        assert!(result.is_err(), "truncated document should fail");
    }

    #[test]
    fn test_should_fail_on_mismatched_container_end() {
        let result = errwrap_xml::from_xml(b"<Error><Name>Required</Name></Errors>");
        assert!(matches!(result, Err(XmlError::QuickXml(_))));
    }

    #[test]
    fn test_should_fail_on_empty_input() {
        let result = errwrap_xml::from_xml(b"");
        assert!(matches!(result, Err(XmlError::MissingElement(_))));
    }

    #[test]
    fn test_should_fail_through_adapter_on_truncated_entry() {
        let mut adapter = ErrorXmlAdapter::default();
        let mut reader = Reader::from_reader(&b"<Error><Name>Required</Name><Age>"[..]);

        let result = adapter.read_xml(&mut reader);
        assert!(result.is_err(), "truncated entry should fail");
    }

    #[test]
    fn test_should_fail_on_undeclared_entity() {
        let result = errwrap_xml::from_xml(b"<Error><Name>&nbsp;</Name></Error>");
        assert!(result.is_err(), "undeclared entity should fail");
    }
}

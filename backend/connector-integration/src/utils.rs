use common_utils::{
    consts,
    errors::{CustomResult, ParsingError},
};
use domain_types::errors::ConnectorError;
use error_stack::ResultExt;
use quick_xml::events::{BytesEnd, BytesStart, Event};

/// Local name of the first element in the document, skipping the declaration,
/// comments and whitespace. `None` when the payload holds no element at all
/// or is not well formed before the root.
pub fn root_element_name(xml: &str) -> Option<String> {
    let mut reader = quick_xml::Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) | Ok(Event::Empty(element)) => {
                return Some(String::from_utf8_lossy(element.local_name().as_ref()).into_owned())
            }
            Ok(Event::Eof) | Err(_) => return None,
            Ok(_) => continue,
        }
    }
}

/// Removes element prefixes (`soap:Body` -> `Body`) and every `xmlns`
/// declaration so the payload can be read with plain serde names.
///
/// Only markup is rewritten. Text, CDATA and comments are copied verbatim.
pub fn strip_xml_namespaces(xml: &str) -> CustomResult<String, ParsingError> {
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut writer = quick_xml::Writer::new(Vec::new());
    loop {
        let event = match reader.read_event().change_context(ParsingError)? {
            Event::Eof => break,
            Event::Start(element) => Event::Start(without_namespaces(&element)?),
            Event::Empty(element) => Event::Empty(without_namespaces(&element)?),
            Event::End(element) => Event::End(BytesEnd::new(
                String::from_utf8_lossy(element.local_name().as_ref()).into_owned(),
            )),
            other => other,
        };
        writer.write_event(event).change_context(ParsingError)?;
    }
    String::from_utf8(writer.into_inner()).change_context(ParsingError)
}

fn without_namespaces(element: &BytesStart<'_>) -> CustomResult<BytesStart<'static>, ParsingError> {
    let mut stripped =
        BytesStart::new(String::from_utf8_lossy(element.local_name().as_ref()).into_owned());
    for attribute in element.attributes() {
        let attribute = attribute.change_context(ParsingError)?;
        let key = attribute.key.as_ref();
        if key == b"xmlns" || key.starts_with(b"xmlns:") {
            continue;
        }
        stripped.push_attribute((key, attribute.value.as_ref()));
    }
    Ok(stripped)
}

pub fn wrap_in_soap_envelope(body: &str) -> String {
    format!(
        r#"{declaration}<soap:Envelope xmlns:soap="{namespace}"><soap:Body>{body}</soap:Body></soap:Envelope>"#,
        declaration = consts::XML_DECLARATION,
        namespace = consts::SOAP_ENVELOPE_NAMESPACE,
    )
}

/// The protected card service is addressed through its WSDL location;
/// calls go to the same path without the `?wsdl` query.
pub fn soap_service_url(wsdl_url: &str) -> CustomResult<String, ConnectorError> {
    let mut url = url::Url::parse(wsdl_url)
        .change_context(ConnectorError::RequestEncodingFailed)
        .attach_printable_lazy(|| format!("invalid service url: {wsdl_url}"))?;
    url.set_query(None);
    Ok(url.to_string())
}

pub fn soap_action(operation: &str) -> String {
    format!("\"{}{operation}\"", consts::PROTECTED_CARD_NAMESPACE)
}

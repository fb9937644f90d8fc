pub const ESR_SERVICE_NAMESPACE: &str = "http://va.gov/service/esr/voa/v1";
pub const ESR_SCHEMA_NAMESPACE: &str = "http://va.gov/schema/esr/voa/v1";
const SOAP_ENVELOPE_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// request body for the `getFormSubmissionStatus` operation
pub fn form_submission_status_envelope(form_submission_id: u64) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<soap:Envelope xmlns:soap="{envelope}" xmlns:tns="{service}" xmlns:sch="{schema}">"#,
            "<soap:Body>",
            "<sch:getFormSubmissionStatus>",
            "<sch:formSubmissionId>{id}</sch:formSubmissionId>",
            "</sch:getFormSubmissionStatus>",
            "</soap:Body>",
            "</soap:Envelope>"
        ),
        envelope = SOAP_ENVELOPE_NAMESPACE,
        service = ESR_SERVICE_NAMESPACE,
        schema = ESR_SCHEMA_NAMESPACE,
        id = form_submission_id,
    )
}

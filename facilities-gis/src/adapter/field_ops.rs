use chrono::DateTime;

use super::AttributeValue;

/// joins a zip code with its +4 suffix as `zip-zip4`. the suffix is dropped
/// when it is missing or blank.
pub fn compose_zip(zip: &AttributeValue, zip4: &AttributeValue) -> String {
    let mut result = zip.to_string();
    if !zip4.is_blank() {
        result.push('-');
        result.push_str(&zip4.to_string());
    }
    result
}

/// formats a phone number with an optional extension as `phone x ext`.
///
/// a blank phone yields the empty string. the extension is dropped when it is
/// blank or equal to zero, where numeric strings such as `"0"` or `"00"` count
/// as zero. any other extension text is appended verbatim.
pub fn compose_phone(phone: &AttributeValue, extension: &AttributeValue) -> String {
    if phone.is_blank() {
        return String::new();
    }
    let mut result = phone.to_string();
    if !extension.is_blank() && !extension.is_zero() {
        result.push_str(" x ");
        result.push_str(&extension.to_string());
    }
    result
}

/// converts milliseconds since the unix epoch into a UTC calendar date in
/// `YYYY-MM-DD` form. the time of day is discarded. values that are missing,
/// non-numeric or outside the representable range give None.
pub fn epoch_ms_to_iso_date(epoch_ms: &AttributeValue) -> Option<String> {
    let millis = epoch_ms.as_epoch_millis()?;
    let datetime = DateTime::from_timestamp_millis(millis)?;
    Some(datetime.date_naive().format("%Y-%m-%d").to_string())
}

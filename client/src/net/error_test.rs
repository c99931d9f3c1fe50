use super::*;

#[test]
fn status_error_formats_code() {
    assert_eq!(ApiError::Status(503).to_string(), "request failed: 503");
}

#[test]
fn network_and_decode_errors_carry_detail() {
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "network error: offline");
    assert_eq!(ApiError::Decode("missing field `name`".to_owned()).to_string(), "invalid response: missing field `name`");
}

#[test]
fn unavailable_error_message() {
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

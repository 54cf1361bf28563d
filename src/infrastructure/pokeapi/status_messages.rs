//! User-facing messages for HTTP failures.

use reqwest::StatusCode;

pub const CONNECTION_FAILED: &str = "Could not connect to the server";
pub const TIMED_OUT: &str = "Request timed out";

/// Returns the message shown to the user for a failed response.
#[must_use]
pub fn message_for_status(status: StatusCode) -> String {
    let fixed = match status.as_u16() {
        400 => "There seems to be a problem with your request. Please check the data provided.",
        401 => "You need to be authenticated to access this feature.",
        403 => "You do not have permission to access this resource.",
        404 => "We could not find what you are looking for.",
        409 => "A similar record already exists. Check the information sent.",
        422 => "The data sent could not be processed. Please review it and try again.",
        500 => "An unexpected error occurred. Try again later.",
        503 => "The service is temporarily unavailable. Please try again in a few minutes.",
        _ => {
            return format!(
                "Error {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown error")
            );
        }
    };
    fixed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(404, "We could not find what you are looking for." ; "not_found")]
    #[test_case(500, "An unexpected error occurred. Try again later." ; "server_error")]
    #[test_case(418, "Error 418: I'm a teapot" ; "fallback_with_reason")]
    #[test_case(502, "Error 502: Bad Gateway" ; "fallback_bad_gateway")]
    fn test_message_for_status(code: u16, expected: &str) {
        let status = StatusCode::from_u16(code).unwrap();
        assert_eq!(message_for_status(status), expected);
    }
}

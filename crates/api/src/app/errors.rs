use axum::http::StatusCode;
use axum::response::IntoResponse;

use dealership_core::DomainError;

/// Body of a failed brand lookup.
pub const DB_ERROR: &str = "DB error";
/// Body of a failed delete.
pub const INVALID_ID: &str = "invalid id";
/// Body of a successful delete.
pub const DELETED: &str = "deleted";

/// A response with a status and no body.
pub fn status_only(status: StatusCode) -> axum::response::Response {
    status.into_response()
}

/// A `text/plain` response with a fixed body.
pub fn plain_text(status: StatusCode, body: &'static str) -> axum::response::Response {
    (status, body).into_response()
}

/// Parse a boolean query parameter.
///
/// Accepts exactly `1 t T TRUE true True` and `0 f F FALSE false False`;
/// anything else, including the empty string, is a validation error.
pub fn parse_bool(raw: &str) -> Result<bool, DomainError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(DomainError::validation(format!("not a boolean: {raw:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ACCEPTED: [&str; 12] = [
        "1", "t", "T", "TRUE", "true", "True", "0", "f", "F", "FALSE", "false", "False",
    ];

    #[test]
    fn accepted_spellings() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("T"), Ok(true));
        assert_eq!(parse_bool("1"), Ok(true));
        assert_eq!(parse_bool("False"), Ok(false));
        assert_eq!(parse_bool("0"), Ok(false));
    }

    #[test]
    fn rejects_near_misses() {
        for raw in ["", "notabool", "yes", "TrUe", " true", "2"] {
            assert!(matches!(parse_bool(raw), Err(DomainError::Validation(_))), "{raw:?}");
        }
    }

    proptest! {
        #[test]
        fn only_the_listed_spellings_parse(raw in "\\PC{0,8}") {
            prop_assert_eq!(parse_bool(&raw).is_ok(), ACCEPTED.contains(&raw.as_str()));
        }
    }

    #[test]
    fn plain_text_sets_status() {
        let res = plain_text(StatusCode::BAD_REQUEST, INVALID_ID);
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(
            res.headers()[axum::http::header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );
    }
}

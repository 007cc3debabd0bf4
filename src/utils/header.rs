//! Signature header parsing and formatting.
//!
//! Header format, fields in any order:
//!
//! ```text
//! t={time},v={verification}
//! t={time},v={verification},v0={old_verification}
//! ```

use crate::{error::SignatureError, models::ParsedSignature};

const TIME_STAMP: &str = "t=";
const VERIFICATION: &str = "v=";
const OLD_VERIFICATION: &str = "v0=";

/// Parse a raw signature header into its time and verification tokens
pub fn parse_signature_header(signature: &str) -> Result<ParsedSignature, SignatureError> {
    let fields: Vec<&str> = signature.split(',').collect();
    if !(2..=3).contains(&fields.len()) {
        return Err(SignatureError::MalformedSignature(signature.to_string()));
    }

    let time = find_field(&fields, TIME_STAMP).ok_or(SignatureError::MissingTimestamp)?;

    // With three fields the old token is required and is resolved before `v=`.
    let old_verification = if fields.len() == 3 {
        let old = find_field(&fields, OLD_VERIFICATION)
            .ok_or(SignatureError::MissingOldVerification)?;
        Some(old)
    } else {
        None
    };

    let verification =
        find_field(&fields, VERIFICATION).ok_or(SignatureError::MissingVerification)?;

    Ok(ParsedSignature {
        time: time.to_string(),
        verification: verification.to_string(),
        old_verification: old_verification.map(str::to_string),
    })
}

/// Render a signature header from its parts
pub fn format_signature_header(
    time: &str,
    verification: &str,
    old_verification: Option<&str>,
) -> String {
    match old_verification {
        Some(old) => format!(
            "{TIME_STAMP}{time},{VERIFICATION}{verification},{OLD_VERIFICATION}{old}"
        ),
        None => format!("{TIME_STAMP}{time},{VERIFICATION}{verification}"),
    }
}

// "v0=" never starts with "v=", so each prefix is tested on its own.
fn find_field<'a>(fields: &[&'a str], prefix: &str) -> Option<&'a str> {
    fields.iter().find_map(|field| field.strip_prefix(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_fields() {
        let parsed = parse_signature_header("t=1000,v=abc").unwrap();
        assert_eq!(parsed.time, "1000");
        assert_eq!(parsed.verification, "abc");
        assert_eq!(parsed.old_verification, None);
    }

    #[test]
    fn test_parse_three_fields_any_order() {
        let parsed = parse_signature_header("v0=old,t=1000,v=new").unwrap();
        assert_eq!(parsed.time, "1000");
        assert_eq!(parsed.verification, "new");
        assert_eq!(parsed.old_verification.as_deref(), Some("old"));
    }

    #[test]
    fn test_v0_is_not_mistaken_for_v() {
        let err = parse_signature_header("t=1000,v0=abc").unwrap_err();
        assert!(matches!(err, SignatureError::MissingVerification));
    }

    #[test]
    fn test_time_is_opaque() {
        let parsed = parse_signature_header("t=not-a-number,v=abc").unwrap();
        assert_eq!(parsed.time, "not-a-number");
    }

    #[test]
    fn test_empty_values_are_kept() {
        let parsed = parse_signature_header("t=,v=,v0=").unwrap();
        assert_eq!(parsed.time, "");
        assert_eq!(parsed.verification, "");
        assert_eq!(parsed.old_verification.as_deref(), Some(""));
    }

    #[test]
    fn test_wrong_field_count_is_malformed() {
        for header in ["", "t=1000", "t=1000,v=a,v0=b,x=c", "t=1,v=2,v0=3,v0=4"] {
            let err = parse_signature_header(header).unwrap_err();
            assert!(
                matches!(err, SignatureError::MalformedSignature(ref raw) if raw == header),
                "expected malformed for '{header}', got {err:?}"
            );
        }
    }

    #[test]
    fn test_missing_fields() {
        assert!(matches!(
            parse_signature_header("v=abc,x=1").unwrap_err(),
            SignatureError::MissingTimestamp
        ));
        assert!(matches!(
            parse_signature_header("t=1000,x=1").unwrap_err(),
            SignatureError::MissingVerification
        ));
        assert!(matches!(
            parse_signature_header("t=1000,v=abc,x=1").unwrap_err(),
            SignatureError::MissingOldVerification
        ));
        assert!(matches!(
            parse_signature_header("t=1000,v=abc,").unwrap_err(),
            SignatureError::MissingOldVerification
        ));
    }

    #[test]
    fn test_old_verification_checked_before_verification() {
        assert!(matches!(
            parse_signature_header("t=1000,x=a,y=b").unwrap_err(),
            SignatureError::MissingOldVerification
        ));
        assert!(matches!(
            parse_signature_header("t=1000,v0=a,y=b").unwrap_err(),
            SignatureError::MissingVerification
        ));
    }

    #[test]
    fn test_prefixes_are_case_sensitive() {
        assert!(matches!(
            parse_signature_header("T=1000,v=abc").unwrap_err(),
            SignatureError::MissingTimestamp
        ));
    }

    #[test]
    fn test_format_signature_header() {
        assert_eq!(format_signature_header("1", "a", None), "t=1,v=a");
        assert_eq!(format_signature_header("1", "a", Some("b")), "t=1,v=a,v0=b");
    }
}

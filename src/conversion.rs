use crate::constants::{Designation, Kilometer};
use crate::neocad_errors::NeoCadError;

/// Coerce a raw designation field into a non-empty identifier.
///
/// Arguments
/// ---------
/// * `raw`: the designation field as read from the source record
///
/// Return
/// ------
/// * the trimmed designation, or [`NeoCadError::MissingDesignation`] if the
///   field is empty or whitespace-only
pub(crate) fn parse_designation(raw: &str) -> Result<Designation, NeoCadError> {
    let designation = raw.trim();
    if designation.is_empty() {
        return Err(NeoCadError::MissingDesignation);
    }
    Ok(designation.to_string())
}

/// Coerce an optional IAU name field.
///
/// Empty or absent input maps to `None`; any non-empty value passes through.
/// The empty string is never stored as a name.
pub(crate) fn parse_optional_name(raw: Option<&str>) -> Option<String> {
    let name = raw?.trim();
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

/// Coerce an optional diameter field (kilometers).
///
/// Arguments
/// ---------
/// * `raw`: the diameter field as read from the source record, if present
///
/// Return
/// ------
/// * `Some(NaN)` when the field is absent or empty (diameter unknown)
/// * `Some(km)` when the field parses as a float
/// * `None` when the field is present but unparseable
///
/// Note
/// ----
/// * The unparseable case is deliberately swallowed instead of raised. The
///   NEO factory degrades to a null-like diameter state for noisy source
///   values, while the close-approach numeric fields treat a parse failure
///   as fatal. See [`parse_float_field`].
pub(crate) fn parse_diameter(raw: Option<&str>) -> Option<Kilometer> {
    let Some(text) = raw else {
        return Some(f64::NAN);
    };
    let text = text.trim();
    if text.is_empty() {
        return Some(f64::NAN);
    }
    text.parse::<Kilometer>().ok()
}

/// Coerce the one-letter hazard flag.
///
/// True iff the raw text uppercases to `"Y"`; every other value, including
/// an absent field, is false.
pub(crate) fn parse_hazard_flag(raw: Option<&str>) -> bool {
    raw.map(|flag| flag.trim().eq_ignore_ascii_case("Y"))
        .unwrap_or(false)
}

/// Parse a required float field (close-approach distance or velocity).
///
/// Arguments
/// ---------
/// * `field`: name of the source field, kept for diagnostics
/// * `raw`: the field text
///
/// Return
/// ------
/// * the parsed value, or [`NeoCadError::UnparseableFloat`] carrying the
///   field name and the offending text
pub(crate) fn parse_float_field(field: &'static str, raw: &str) -> Result<f64, NeoCadError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| NeoCadError::UnparseableFloat {
            field,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod conversion_test {
    use super::*;

    #[test]
    fn test_parse_designation() {
        assert_eq!(parse_designation("433"), Ok("433".to_string()));
        assert_eq!(parse_designation(" 2010 PK9 "), Ok("2010 PK9".to_string()));
        assert_eq!(parse_designation(""), Err(NeoCadError::MissingDesignation));
        assert_eq!(
            parse_designation("   "),
            Err(NeoCadError::MissingDesignation)
        );
    }

    #[test]
    fn test_parse_optional_name() {
        assert_eq!(parse_optional_name(Some("Eros")), Some("Eros".to_string()));
        assert_eq!(parse_optional_name(Some("")), None);
        assert_eq!(parse_optional_name(Some("  ")), None);
        assert_eq!(parse_optional_name(None), None);
    }

    #[test]
    fn test_parse_diameter() {
        assert_eq!(parse_diameter(Some("16.84")), Some(16.84));
        assert!(parse_diameter(Some("")).unwrap().is_nan());
        assert!(parse_diameter(None).unwrap().is_nan());
        // Unparseable text degrades to the null-like state, not an error
        assert_eq!(parse_diameter(Some("n/a")), None);
    }

    #[test]
    fn test_parse_hazard_flag() {
        assert!(parse_hazard_flag(Some("Y")));
        assert!(parse_hazard_flag(Some("y")));
        assert!(!parse_hazard_flag(Some("N")));
        assert!(!parse_hazard_flag(Some("")));
        assert!(!parse_hazard_flag(Some("yes")));
        assert!(!parse_hazard_flag(None));
    }

    #[test]
    fn test_parse_float_field() {
        assert_eq!(
            parse_float_field("dist", "0.397647483265833"),
            Ok(0.397647483265833)
        );
        assert_eq!(parse_float_field("v_rel", " 3.72 "), Ok(3.72));
        assert_eq!(
            parse_float_field("dist", "far"),
            Err(NeoCadError::UnparseableFloat {
                field: "dist",
                value: "far".to_string()
            })
        );
    }
}

//! Validation of user-supplied parameters shared by the batch command and
//! the HTTP form.

use std::path::Path;

use gridshift_core::RotationPolicy;

use crate::batch::BatchError;

/// Parse an insertion period, which must be a positive integer.
///
/// # Example
///
/// ```
/// use gridshift_cli::params::parse_period;
///
/// assert_eq!(parse_period("nrow", "3").unwrap(), 3);
/// assert!(parse_period("nrow", "0").is_err());
/// assert!(parse_period("nrow", "three").is_err());
/// ```
pub fn parse_period(name: &'static str, raw: &str) -> Result<usize, BatchError> {
    let value: i64 = raw.trim().parse().map_err(|_| BatchError::InvalidParameter {
        name,
        reason: format!("'{raw}' is not an integer"),
    })?;

    if value <= 0 {
        return Err(BatchError::InvalidParameter {
            name,
            reason: format!("must be positive, got {value}"),
        });
    }

    usize::try_from(value).map_err(|_| BatchError::InvalidParameter {
        name,
        reason: format!("{value} is too large"),
    })
}

/// Parse a rotation policy name. An empty value selects the default.
pub fn parse_rotation(raw: &str) -> Result<RotationPolicy, BatchError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "sweep" => Ok(RotationPolicy::Sweep),
        "center3x3" | "center_3x3" | "center" => Ok(RotationPolicy::Center3x3),
        other => Err(BatchError::InvalidParameter {
            name: "rotation",
            reason: format!("unknown rotation policy '{other}'"),
        }),
    }
}

/// Reduce a requested output name to a bare file name.
///
/// Directory components are dropped so the name can never point outside the
/// directory it is joined onto. Names that are empty after that, or that
/// contain quotes or control characters, are rejected.
pub fn sanitize_file_name(name: &'static str, raw: &str) -> Result<String, BatchError> {
    let invalid = |reason: &str| BatchError::InvalidParameter {
        name,
        reason: format!("{reason}: '{raw}'"),
    };

    // Treat backslashes as separators too so Windows-style paths are stripped
    let normalized = raw.trim().replace('\\', "/");
    let file_name = Path::new(&normalized)
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| invalid("not a file name"))?;

    if file_name.chars().any(|c| c.is_control() || c == '"') {
        return Err(invalid("contains forbidden characters"));
    }

    Ok(file_name.to_string())
}

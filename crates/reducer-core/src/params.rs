//! Reduction parameters parsed from caller-supplied strings.

use thiserror::Error;

/// Form field holding the maximum output width.
pub const MAX_WIDTH_FIELD: &str = "maxWidth";
/// Form field holding the maximum output height.
pub const MAX_HEIGHT_FIELD: &str = "maxHeight";

/// Errors raised while parsing reduction parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("missing value for {field}")]
    Missing { field: &'static str },

    #[error("invalid value for {field}: {value:?}")]
    Invalid { field: &'static str, value: String },
}

impl ParamError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ParamError::Missing { field } | ParamError::Invalid { field, .. } => field,
        }
    }
}

/// Bounding box a reduced image must fit inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReduceParams {
    pub max_width: u32,
    pub max_height: u32,
}

impl ReduceParams {
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    /// Parse both bounds, width first.
    ///
    /// # Errors
    ///
    /// Returns the first `ParamError` encountered.
    pub fn parse(max_width: Option<&str>, max_height: Option<&str>) -> Result<Self, ParamError> {
        Ok(Self {
            max_width: parse_dimension(MAX_WIDTH_FIELD, max_width)?,
            max_height: parse_dimension(MAX_HEIGHT_FIELD, max_height)?,
        })
    }
}

/// Parse one unsigned decimal bound.
///
/// Only ASCII digits are accepted: no sign, whitespace or radix prefix. The
/// value must fit in a `u64` and is then narrowed to `u32`, saturating at
/// `u32::MAX` (which never constrains a decodable image).
pub fn parse_dimension(field: &'static str, value: Option<&str>) -> Result<u32, ParamError> {
    let value = value.ok_or(ParamError::Missing { field })?;

    let invalid = || ParamError::Invalid {
        field,
        value: value.to_string(),
    };

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let wide: u64 = value.parse().map_err(|_| invalid())?;
    Ok(u32::try_from(wide).unwrap_or(u32::MAX))
}

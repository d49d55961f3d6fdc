//! Extraction of the `/reduce` multipart form.

use axum::body::Bytes;
use axum::extract::Multipart;
use reducer_core::params::{MAX_HEIGHT_FIELD, MAX_WIDTH_FIELD};
use reducer_core::ReduceParams;

use crate::error::ApiError;

/// Form part carrying the image bytes.
pub const IMAGE_FIELD: &str = "image";

/// Raw `/reduce` form contents, before validation.
#[derive(Debug, Default)]
pub struct ReduceForm {
    pub image: Option<Bytes>,
    pub max_width: Option<String>,
    pub max_height: Option<String>,
}

impl ReduceForm {
    /// Read every part of the form.
    ///
    /// The image is only taken from a file part (one with a filename) and the
    /// bounds only from plain parts. When a field repeats, the first value
    /// wins and later copies are skipped unread. Unknown parts are skipped.
    pub async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = ReduceForm::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            let is_file = field.file_name().is_some();
            match (name.as_str(), is_file) {
                (IMAGE_FIELD, true) if form.image.is_none() => {
                    form.image = Some(field.bytes().await?);
                }
                (MAX_WIDTH_FIELD, false) if form.max_width.is_none() => {
                    form.max_width = Some(field.text().await?);
                }
                (MAX_HEIGHT_FIELD, false) if form.max_height.is_none() => {
                    form.max_height = Some(field.text().await?);
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// Apply bounds given as URL query parameters.
    ///
    /// A bound present in the query takes precedence over the same field in
    /// the multipart body, and its first occurrence wins. The image is never
    /// read from the query.
    pub fn with_query(mut self, query: &[(String, String)]) -> Self {
        if let Some(value) = first_value(query, MAX_WIDTH_FIELD) {
            self.max_width = Some(value.to_owned());
        }
        if let Some(value) = first_value(query, MAX_HEIGHT_FIELD) {
            self.max_height = Some(value.to_owned());
        }
        self
    }

    /// Check the form and split it into image bytes and parsed bounds.
    ///
    /// The image is checked first, then `maxWidth`, then `maxHeight`.
    pub fn validate(self) -> Result<(Bytes, ReduceParams), ApiError> {
        let image = self.image.ok_or(ApiError::MissingField(IMAGE_FIELD))?;
        let params = ReduceParams::parse(self.max_width.as_deref(), self.max_height.as_deref())?;
        Ok((image, params))
    }
}

fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reducer_core::ParamError;

    fn form(image: Option<&[u8]>, w: Option<&str>, h: Option<&str>) -> ReduceForm {
        ReduceForm {
            image: image.map(Bytes::copy_from_slice),
            max_width: w.map(str::to_owned),
            max_height: h.map(str::to_owned),
        }
    }

    fn query(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_validate_complete_form() {
        let (image, params) = form(Some(&b"abcd"[..]), Some("300"), Some("200"))
            .validate()
            .unwrap();
        assert_eq!(&image[..], b"abcd");
        assert_eq!(params, ReduceParams::new(300, 200));
    }

    #[test]
    fn test_missing_image_reported_before_params() {
        let err = form(None, None, None).validate().unwrap_err();
        assert!(matches!(err, ApiError::MissingField(IMAGE_FIELD)));
    }

    #[test]
    fn test_missing_width() {
        let err = form(Some(&b"x"[..]), None, Some("10")).validate().unwrap_err();
        assert!(matches!(
            err,
            ApiError::InvalidParameter(ParamError::Missing {
                field: MAX_WIDTH_FIELD
            })
        ));
    }

    #[test]
    fn test_invalid_height() {
        let err = form(Some(&b"x"[..]), Some("10"), Some("ten"))
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::InvalidParameter(ParamError::Invalid {
                field: MAX_HEIGHT_FIELD,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_image_is_present() {
        // An empty upload is passed on; the sniffer rejects it later.
        let (image, _) = form(Some(&b""[..]), Some("1"), Some("1")).validate().unwrap();
        assert!(image.is_empty());
    }

    #[test]
    fn test_query_supplies_missing_bounds() {
        let (_, params) = form(Some(&b"x"[..]), None, None)
            .with_query(&query(&[("maxWidth", "10"), ("maxHeight", "20")]))
            .validate()
            .unwrap();
        assert_eq!(params, ReduceParams::new(10, 20));
    }

    #[test]
    fn test_query_takes_precedence_over_body() {
        let (_, params) = form(Some(&b"x"[..]), Some("300"), Some("200"))
            .with_query(&query(&[("maxHeight", "50")]))
            .validate()
            .unwrap();
        assert_eq!(params, ReduceParams::new(300, 50));
    }

    #[test]
    fn test_query_first_occurrence_wins() {
        let (_, params) = form(Some(&b"x"[..]), None, Some("5"))
            .with_query(&query(&[("maxWidth", "7"), ("maxWidth", "abc")]))
            .validate()
            .unwrap();
        assert_eq!(params, ReduceParams::new(7, 5));
    }

    #[test]
    fn test_query_never_supplies_image() {
        let err = form(None, Some("1"), Some("1"))
            .with_query(&query(&[("image", "abcd")]))
            .validate()
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingField(IMAGE_FIELD)));
    }

    #[test]
    fn test_empty_query_leaves_form_untouched() {
        let err = form(Some(&b"x"[..]), None, Some("1"))
            .with_query(&[])
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::InvalidParameter(ParamError::Missing {
                field: MAX_WIDTH_FIELD
            })
        ));
    }
}

//! Query parameters sent to the search endpoints.

use super::EntityKind;

/// Asks the endpoint for a bare JSON array of records.
pub const SHAPE_PARAM: (&str, &str) = ("_shape", "array");
/// Asks the endpoint for as many rows as it will return.
pub const SIZE_PARAM: (&str, &str) = ("_size", "max");

/// Builds `{<field>__contains: term, _shape: array, _size: max}` for `kind`.
pub fn build_query(kind: EntityKind, term: &str) -> Vec<(String, String)> {
    vec![
        (format!("{}__contains", kind.filter_field()), term.to_string()),
        (SHAPE_PARAM.0.to_string(), SHAPE_PARAM.1.to_string()),
        (SIZE_PARAM.0.to_string(), SIZE_PARAM.1.to_string()),
    ]
}

/// URL-encodes query parameters (without the leading `?`).
pub fn encode_query(params: &[(String, String)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish()
}

/// Parses an integer query value, falling back to `default`.
///
/// Absent values and values that are not integers both yield the default, so a
/// malformed query string never fails the request.
///
/// # Arguments
/// - `value` - Raw query parameter value, if present
/// - `default` - Value used when `value` is absent or malformed
///
/// # Returns
/// - `i64` - The parsed value or the default
pub fn parse_i64_or(value: Option<&str>, default: i64) -> i64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(default)
}

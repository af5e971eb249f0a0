/// Wraps a value containing a space in double quotes.
///
/// Values that already start with `"` or `'` are returned unchanged, so
/// quoting is idempotent.
///
/// # Examples
///
/// ```
/// use genericflag_core::quote_value;
///
/// assert_eq!(quote_value("John Smith"), "\"John Smith\"");
/// assert_eq!(quote_value("'John Smith'"), "'John Smith'");
/// assert_eq!(quote_value("plain"), "plain");
/// ```
pub fn quote_value(value: &str) -> String {
    if value.contains(' ') && !value.starts_with('"') && !value.starts_with('\'') {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

//! POSIX single-quote quoting for arguments submitted to an interactive shell.

/// Escape embedded single quotes for use inside a single-quoted argument.
///
/// Each `'` becomes `'\''`: close the quote, emit an escaped literal quote,
/// reopen the quote. Nothing else is special inside single quotes.
pub fn escape_single_quotes(value: &str) -> String {
    value.replace('\'', r"'\''")
}

/// Wrap `value` as one single-quoted shell argument.
///
/// `O'Brien` -> `'O'\''Brien'`
pub fn quote_single(value: &str) -> String {
    format!("'{}'", escape_single_quotes(value))
}

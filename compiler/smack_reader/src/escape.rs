//! String literal cooking.

/// Strip the surrounding quotes from a string token and resolve backslash
/// escapes.
///
/// The token may lack its closing quote when it ran to end of input; the
/// text up to there is kept. Unknown escapes are kept verbatim, backslash
/// included.
pub(crate) fn cook_string(token: &str) -> String {
    let body = token.strip_prefix('"').unwrap_or(token);
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => break,
            '\\' => match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some('0') => out.push('\0'),
                Some('\\') => out.push('\\'),
                Some('"') => out.push('"'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            },
            c => out.push(c),
        }
    }
    out
}

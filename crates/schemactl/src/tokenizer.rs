//! Quote-aware splitting of shell input lines.

/// Split a line into arguments.
///
/// Whitespace separates arguments outside quotes. A `'` or `"` opens a quoted
/// run that only the same character closes, so the other quote character is
/// literal inside it. Quotes are removed, `""` yields an empty argument, and an
/// unterminated quote runs to the end of the line.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    // A quoted run makes the argument exist even when it is empty
    let mut started = false;

    for c in line.chars() {
        match quote {
            Some(open) if c == open => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                started = true;
            }
            None if c.is_whitespace() => {
                if started || !current.is_empty() {
                    args.push(std::mem::take(&mut current));
                    started = false;
                }
            }
            None => current.push(c),
        }
    }

    if started || !current.is_empty() {
        args.push(current);
    }

    args
}

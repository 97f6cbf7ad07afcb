//! Purpose: Strip `//` and `/* */` comments from JSON input text.
//! Exports: `strip`.
//! Role: Pre-parse pass so the codec can accept annotated JSON.
//! Invariants: String literals, including escaped quotes, pass through intact.
//! Invariants: An unterminated block comment is dropped to end of input.

/// Returns `input` with comments removed.
///
/// Line comments keep their terminating newline; block comments are
/// replaced by a single space so adjacent tokens stay separated.
pub fn strip(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;
    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => {
                in_string = true;
                out.push(ch);
            }
            '/' => match chars.peek() {
                Some('/') => {
                    chars.next();
                    for skipped in chars.by_ref() {
                        if skipped == '\n' {
                            out.push('\n');
                            break;
                        }
                    }
                }
                Some('*') => {
                    chars.next();
                    let mut prev_star = false;
                    for skipped in chars.by_ref() {
                        if prev_star && skipped == '/' {
                            break;
                        }
                        prev_star = skipped == '*';
                    }
                    out.push(' ');
                }
                _ => out.push('/'),
            },
            _ => out.push(ch),
        }
    }
    out
}

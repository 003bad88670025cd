use std::iter;

/// Quotes `arg` so that the Microsoft C runtime splits it back into exactly
/// one argument.
pub fn quote_windows_arg(arg: &str) -> String {
    if !arg.is_empty() && !arg.contains([' ', '\t', '\n', '\x0b', '"']) {
        return arg.to_owned();
    }

    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    let mut backslashes = 0;
    for c in arg.chars() {
        if c == '\\' {
            backslashes += 1;
            continue;
        }
        // Backslashes are literal unless they precede a quote.
        let escapes = if c == '"' {
            backslashes * 2 + 1
        } else {
            backslashes
        };
        quoted.extend(iter::repeat('\\').take(escapes));
        quoted.push(c);
        backslashes = 0;
    }
    quoted.extend(iter::repeat('\\').take(backslashes * 2));
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_are_untouched() {
        assert_eq!(quote_windows_arg("main.py"), "main.py");
        assert_eq!(quote_windows_arg(r"src\main.py"), r"src\main.py");
    }

    #[test]
    fn whitespace_is_quoted() {
        assert_eq!(quote_windows_arg("lock screen.py"), r#""lock screen.py""#);
        assert_eq!(quote_windows_arg(""), r#""""#);
    }

    #[test]
    fn quotes_and_trailing_backslashes_are_escaped() {
        assert_eq!(quote_windows_arg(r#"say "hi".py"#), r#""say \"hi\".py""#);
        assert_eq!(quote_windows_arg(r"a b\"), r#""a b\\""#);
        assert_eq!(quote_windows_arg(r#"a\"b"#), r#""a\\\"b""#);
    }
}

/// Argument extraction for chat commands
///
/// Commands are matched on the lowercased input but arguments are echoed
/// back with the user's own casing, so they are cut from the original text.

/// Text following `keyword` in `input`, trimmed.
///
/// `keyword` is expected to be a prefix of `input.to_lowercase()`. The cut
/// point is found by lowercasing `input` one char at a time, since some
/// chars change byte length when lowercased.
pub fn argument_after<'a>(input: &'a str, keyword: &str) -> &'a str {
    let mut consumed = 0;

    for (index, ch) in input.char_indices() {
        if consumed >= keyword.len() {
            return input[index..].trim();
        }
        consumed += ch.to_lowercase().map(char::len_utf8).sum::<usize>();
    }

    ""
}

/// Whitespace-separated tokens of `input`
pub fn tokens(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_keeps_casing() {
        assert_eq!(argument_after("todo add Buy Milk", "todo add"), "Buy Milk");
        assert_eq!(argument_after("TODO ADD Buy Milk", "todo add"), "Buy Milk");
        assert_eq!(argument_after("Say Hello World", "say "), "Hello World");
    }

    #[test]
    fn test_argument_missing() {
        assert_eq!(argument_after("play", "play"), "");
        assert_eq!(argument_after("play   ", "play"), "");
    }

    #[test]
    fn test_argument_glued_to_keyword() {
        // prefix rules do not require a space after the keyword
        assert_eq!(argument_after("playmysong now", "play"), "mysong now");
    }

    #[test]
    fn test_argument_after_multibyte_prefix() {
        // KELVIN SIGN lowercases to ASCII 'k'
        assert_eq!(argument_after("\u{212A}ey value", "key"), "value");
    }

    #[test]
    fn test_tokens() {
        assert_eq!(tokens("calculator  5 +\t7"), vec!["calculator", "5", "+", "7"]);
        assert!(tokens("   ").is_empty());
    }
}

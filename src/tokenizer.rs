//! Whitespace tokenization of a single input line.
//!
//! A line is split into at most [`MAX_ARGS`] non-empty words separated by
//! runs of the space character. The tokenizer returns owned `String`s rather
//! than slices into the input so the tokens outlive the line buffer they came
//! from; the per-token allocation is an accepted cost.

/// The word separator. Only the plain space character separates tokens;
/// anything else (including tabs) is part of a word.
pub const DELIMITER: char = ' ';

/// Maximum number of tokens produced for one line, command name included.
/// Words past the bound are silently dropped.
pub const MAX_ARGS: usize = 10;

/// Skips a leading run of `delimiter` and returns the rest of the string.
///
/// Does not mutate anything and never skips past the end of the input: the
/// empty string is returned unchanged for any delimiter.
pub fn skip_delimiters(input: &str, delimiter: char) -> &str {
    let mut rest = input;
    while let Some(stripped) = rest.strip_prefix(delimiter) {
        rest = stripped;
    }
    rest
}

/// Splits `line` into at most `max_tokens` whitespace-delimited words.
///
/// Consecutive delimiters collapse, so no token is ever empty; a line that is
/// empty or all delimiters yields an empty vector. Once `max_tokens` words
/// have been collected the remainder of the line is dropped without error.
/// The caller is expected to have stripped the trailing newline already.
pub fn split_line(line: &str, max_tokens: usize) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut rest = line;

    while tokens.len() < max_tokens {
        rest = skip_delimiters(rest, DELIMITER);
        if rest.is_empty() {
            break;
        }
        match rest.find(DELIMITER) {
            Some(end) => {
                tokens.push(rest[..end].to_string());
                rest = &rest[end + 1..];
            }
            None => {
                tokens.push(rest.to_string());
                break;
            }
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_yields_no_tokens() {
        assert!(split_line("", MAX_ARGS).is_empty());
    }

    #[test]
    fn test_all_delimiter_line_yields_no_tokens() {
        assert!(split_line("     ", MAX_ARGS).is_empty());
        assert!(split_line(" ", MAX_ARGS).is_empty());
    }

    #[test]
    fn test_surrounding_and_repeated_delimiters_collapse() {
        let tokens = split_line("  ls   -a  ", MAX_ARGS);
        assert_eq!(tokens, vec!["ls".to_string(), "-a".to_string()]);
    }

    #[test]
    fn test_single_word() {
        let tokens = split_line("cd", MAX_ARGS);
        assert_eq!(tokens, vec!["cd".to_string()]);
    }

    #[test]
    fn test_tokens_are_never_empty_and_contain_no_delimiter() {
        let tokens = split_line("   a  bb   ccc d ", MAX_ARGS);
        assert_eq!(tokens.len(), 4);
        for token in &tokens {
            assert!(!token.is_empty());
            assert!(!token.contains(DELIMITER));
        }
    }

    #[test]
    fn test_truncates_silently_at_max_tokens() {
        let line = "w0 w1 w2 w3 w4 w5 w6 w7 w8 w9 w10 w11";
        let tokens = split_line(line, MAX_ARGS);
        assert_eq!(tokens.len(), MAX_ARGS);
        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(token, &format!("w{}", i));
        }
    }

    #[test]
    fn test_skip_delimiters_identity_on_empty_input() {
        assert_eq!(skip_delimiters("", ' '), "");
        assert_eq!(skip_delimiters("", 'x'), "");
    }

    #[test]
    fn test_skip_delimiters_identity_when_no_leading_delimiter() {
        assert_eq!(skip_delimiters("abc  ", ' '), "abc  ");
    }

    #[test]
    fn test_skip_delimiters_strips_leading_run_only() {
        assert_eq!(skip_delimiters("   abc def", ' '), "abc def");
    }
}

use crate::domain::AppError;

/// Greedy word wrap over space-separated words.
///
/// Each word is appended with a trailing space and the candidate line is
/// measured; the first word that pushes it past `max_width` starts a new line.
/// A single word wider than `max_width` still gets its own line. The last
/// partial line is always emitted.
pub fn wrap_words<F>(text: &str, max_width: f32, mut measure: F) -> Result<Vec<String>, AppError>
where
    F: FnMut(&str) -> Result<f32, AppError>,
{
    let mut lines = Vec::new();
    let mut line = String::new();

    for (n, word) in text.split(' ').enumerate() {
        let candidate = format!("{}{} ", line, word);
        if n > 0 && measure(&candidate)? > max_width {
            lines.push(std::mem::replace(&mut line, format!("{} ", word)));
        } else {
            line = candidate;
        }
    }
    lines.push(line);

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn chars_width(line: &str) -> Result<f32, AppError> {
        Ok(line.chars().count() as f32 * 10.0)
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_words("hello world", 1400.0, chars_width).unwrap();
        assert_eq!(lines, vec!["hello world ".to_string()]);
    }

    #[test]
    fn breaks_before_overflowing_word() {
        // "aaaa bbbb " is 100px, adding "cccc " makes 150px.
        let lines = wrap_words("aaaa bbbb cccc", 100.0, chars_width).unwrap();
        assert_eq!(lines, vec!["aaaa bbbb ".to_string(), "cccc ".to_string()]);
    }

    #[test]
    fn oversized_word_gets_its_own_line() {
        let lines = wrap_words("a verylongwordindeed b", 60.0, chars_width).unwrap();
        assert_eq!(
            lines,
            vec!["a ".to_string(), "verylongwordindeed ".to_string(), "b ".to_string()]
        );
    }

    #[test]
    fn oversized_first_word_is_not_measured_away() {
        let lines = wrap_words("enormous", 10.0, chars_width).unwrap();
        assert_eq!(lines, vec!["enormous ".to_string()]);
    }

    #[test]
    fn measure_errors_propagate() {
        let err = wrap_words("a b", 10.0, |_| Err(AppError::Render("no font".into()))).unwrap_err();
        assert!(matches!(err, AppError::Render(_)));
    }

    proptest! {
        #[test]
        fn wrapping_preserves_words_and_respects_width(
            words in prop::collection::vec("[a-zA-Z,.]{1,14}", 1..60),
            max_width in 40.0f32..600.0,
        ) {
            let text = words.join(" ");
            let lines = wrap_words(&text, max_width, chars_width).unwrap();

            let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
            let original: Vec<&str> = text.split_whitespace().collect();
            prop_assert_eq!(rejoined, original);

            for line in &lines {
                if line.split_whitespace().count() > 1 {
                    prop_assert!(chars_width(line).unwrap() <= max_width);
                }
            }
        }
    }
}

/// Hard-wraps plain text at `max_width` columns, breaking words that are
/// longer than a full line.
pub fn wrap_text(text: &str, max_width: usize) -> String {
    let width = max_width.max(1);
    text.split('\n')
        .map(|line| wrap_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> String {
    let mut rows: Vec<String> = Vec::new();
    let mut row = String::new();
    let mut row_len = 0;
    for word in line.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for piece in chars.chunks(width) {
            if row_len > 0 && row_len + 1 + piece.len() > width {
                rows.push(std::mem::take(&mut row));
                row_len = 0;
            }
            if row_len > 0 {
                row.push(' ');
                row_len += 1;
            }
            row.extend(piece);
            row_len += piece.len();
        }
    }
    if row_len > 0 || rows.is_empty() {
        rows.push(row);
    }
    rows.join("\n")
}

/// Email bodies go out with CRLF line endings.
pub fn to_crlf(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        let wrapped = wrap_text("one two three four", 9);
        assert_eq!(wrapped, "one two\nthree\nfour");
    }

    #[test]
    fn keeps_blank_lines_and_splits_long_words() {
        let wrapped = wrap_text("abcdefghij\n\nok", 4);
        assert_eq!(wrapped, "abcd\nefgh\nij\n\nok");
    }

    #[test]
    fn multibyte_words_are_split_on_char_boundaries() {
        let wrapped = wrap_text("ééééé", 2);
        assert_eq!(wrapped, "éé\néé\né");
    }

    #[test]
    fn trailing_newline_and_short_words_after_a_split() {
        assert_eq!(wrap_text("abcdef g\n", 4), "abcd\nef g\n");
        assert_eq!(wrap_text("   ", 4), "");
    }

    #[test]
    fn crlf_conversion_is_idempotent() {
        assert_eq!(to_crlf("a\nb"), "a\r\nb");
        assert_eq!(to_crlf("a\r\nb"), "a\r\nb");
    }
}

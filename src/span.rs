use derive_more::Display;

/// Byte range `[start, end)` into the source a token was lexed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "[{}:{}]", start, end)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn empty(at: usize) -> Self {
        Span { start: at, end: at }
    }

    pub fn str_from_source<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start..self.end]
    }

    pub fn string_from_source(&self, input: &str) -> String {
        self.str_from_source(input).to_string()
    }

    /// 1-based row and column of the first character of the span.
    pub fn to_start_row_col(self, input: &str) -> (usize, usize) {
        let mut row = 1;
        let mut col = 1;
        for (offset, c) in input.char_indices() {
            if offset >= self.start {
                break;
            }
            match c {
                '\n' => {
                    row += 1;
                    col = 1;
                }
                _ => {
                    col += 1;
                }
            }
        }
        (row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_col_counts_lines_from_one() {
        let input = "12\n 3 + x";
        assert_eq!(Span::new(0, 2).to_start_row_col(input), (1, 1));
        assert_eq!(Span::new(4, 5).to_start_row_col(input), (2, 2));
        assert_eq!(Span::new(8, 9).to_start_row_col(input), (2, 6));
    }

    #[test]
    fn slices_source() {
        let input = "let total";
        assert_eq!(Span::new(4, 9).str_from_source(input), "total");
        assert_eq!(Span::empty(9).string_from_source(input), "");
        assert_eq!(Span::new(4, 9).to_string(), "[4:9]");
    }
}

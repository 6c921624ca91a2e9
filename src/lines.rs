//! Line splitting and re-joining shared by both aligners.

/// Splits `text` on `\n`, reporting a single trailing newline as a flag
/// rather than as a phantom empty last line.
pub fn split_lines(text: &str) -> (Vec<&str>, bool) {
    let ends_with_newline = text.ends_with('\n');
    let body = if ends_with_newline {
        &text[..text.len() - 1]
    } else {
        text
    };
    (body.split('\n').collect(), ends_with_newline)
}

/// Accumulates rendered cells into `\n`-joined output.
///
/// Callers emit cells with [`add`](BlockBuffer::add) and
/// [`spaces`](BlockBuffer::spaces) and insert a
/// [`line_break`](BlockBuffer::line_break) between rows; padding after the
/// last cell of a row is kept, since column alignment is exactly about
/// where padding lands.
#[derive(Debug, Default)]
pub struct BlockBuffer {
    out: String,
}

impl BlockBuffer {
    pub fn add(&mut self, value: &str) -> &mut Self {
        self.out.push_str(value);
        self
    }

    pub fn spaces(&mut self, count: usize) -> &mut Self {
        if count > 0 {
            self.out.push_str(&" ".repeat(count));
        }
        self
    }

    pub fn line_break(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    /// Finishes the block, restoring the input's trailing newline.
    pub fn into_string(self, trailing_newline: bool) -> String {
        let mut out = self.out;
        if trailing_newline {
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_tracks_trailing_newline_as_flag() {
        assert_eq!(split_lines("a\nb\n"), (vec!["a", "b"], true));
        assert_eq!(split_lines("a\nb"), (vec!["a", "b"], false));
    }

    #[test]
    fn split_keeps_interior_blank_lines() {
        assert_eq!(split_lines("a\n\nb"), (vec!["a", "", "b"], false));
        assert_eq!(split_lines("a\n\n"), (vec!["a", ""], true));
    }

    #[test]
    fn buffer_joins_rows_and_restores_newline() {
        let mut buffer = BlockBuffer::default();
        buffer.add("a").spaces(2).line_break().add("bb");
        assert_eq!(buffer.into_string(true), "a  \nbb\n");

        let mut buffer = BlockBuffer::default();
        buffer.add("a").spaces(0);
        assert_eq!(buffer.into_string(false), "a");
    }
}

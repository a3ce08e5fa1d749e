/// Marker injected in front of a word that contains a carriage return.
pub const PARAGRAPH_BREAK: &str = "\r \r";

/// Wraps `text` so no line is wider than `max_width` under `measure`.
///
/// If the whole string fits it is returned unchanged. Otherwise words (split
/// on single spaces) are accumulated greedily while
/// `line_width + word_width < max_width`; a word that would exactly fill the
/// remaining width starts a new line. Every accepted word is followed by one
/// space, and that space's width is counted, so wrapped output keeps a
/// trailing space before each `\n` and at the end.
///
/// A word wider than `max_width` starts a fresh line and is split at its
/// middle character; both halves are wrapped again, recursively, until they
/// fit or are a single character, which is emitted as-is. A word containing
/// `\r` resets the line width and is preceded by [`PARAGRAPH_BREAK`].
///
/// Runs of extra spaces are kept only inside a line; they never start one.
/// Line widths, measured without the trailing space, stay within
/// `max_width` whenever every single character does.
///
/// ```
/// # use kestrel_engine::text::wrap_text;
/// let mono = |s: &str| s.chars().count() as f32;
/// assert_eq!(wrap_text(mono, "The quick brown fox", 11.0), "The quick \nbrown fox ");
/// ```
pub fn wrap_text<F>(measure: F, text: &str, max_width: f32) -> String
where
    F: Fn(&str) -> f32,
{
    if measure(text) <= max_width {
        return text.to_owned();
    }

    let mut wrapper = Wrapper {
        space_width: measure(" "),
        measure,
        max_width,
        out: String::with_capacity(text.len() + text.len() / 8),
        line_width: 0.0,
        line_open: false,
    };

    for word in text.split(' ') {
        wrapper.push_word(word);
    }

    wrapper.out
}

/// [`wrap_text`] split into owned lines.
pub fn wrap_lines<F>(measure: F, text: &str, max_width: f32) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    wrap_text(measure, text, max_width)
        .split('\n')
        .map(str::to_owned)
        .collect()
}

struct Wrapper<F> {
    measure: F,
    max_width: f32,
    space_width: f32,
    out: String,
    line_width: f32,
    /// Something has been emitted on the current line.
    line_open: bool,
}

impl<F> Wrapper<F>
where
    F: Fn(&str) -> f32,
{
    fn push_word(&mut self, word: &str) {
        if word.is_empty() {
            // Extra separators never start or wrap a line.
            if self.line_open && self.line_width < self.max_width {
                self.append(word, 0.0);
            }
            return;
        }

        let width = (self.measure)(word);

        if word.contains('\r') {
            self.out.push_str(PARAGRAPH_BREAK);
            self.line_width = 0.0;
            self.line_open = false;
        }

        if self.line_width + width < self.max_width {
            self.append(word, width);
        } else if width > self.max_width {
            self.push_oversized(word, width);
        } else {
            self.break_line();
            self.append(word, width);
        }
    }

    /// Splits `word` at its middle character and wraps both halves.
    fn push_oversized(&mut self, word: &str, width: f32) {
        self.break_line();

        let chars = word.chars().count();
        if chars < 2 {
            // Cannot shrink further.
            self.append(word, width);
            return;
        }

        let mid = word
            .char_indices()
            .nth(chars / 2)
            .map_or(word.len(), |(i, _)| i);
        let (head, tail) = word.split_at(mid);

        self.push_word(head);
        self.push_word(tail);
    }

    fn append(&mut self, word: &str, width: f32) {
        self.out.push_str(word);
        self.out.push(' ');
        self.line_width += width + self.space_width;
        self.line_open |= !word.is_empty();
    }

    fn break_line(&mut self) {
        if self.line_open {
            self.out.push('\n');
        }
        self.line_width = 0.0;
        self.line_open = false;
    }
}

use crate::settings::Indent;

/// Line-oriented text buffer that tracks the current indentation level.
///
/// All artifacts are assembled through this buffer so indentation comes from
/// the configured [`Indent`] in exactly one place. Lines end with `\n`.
pub struct CodeBuffer {
    unit: String,
    out: String,
    level: usize,
}

impl CodeBuffer {
    pub fn new(indent: &Indent) -> Self {
        Self {
            unit: indent.unit(),
            out: String::new(),
            level: 0,
        }
    }

    /// Appends one line at the current indentation level.
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.level {
            self.out.push_str(&self.unit);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Appends an empty line, never indented.
    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    pub fn indent(&mut self) {
        self.level += 1;
    }

    pub fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    pub fn finish(self) -> String {
        self.out
    }
}

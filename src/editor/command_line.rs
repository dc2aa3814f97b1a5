//! Single-line input used while typing `:` commands and `/` searches.

/// Text and cursor of the command line. Independent from the main buffer.
///
/// The input is created with its prefix character already typed, so a fresh
/// command line reads `:` with the cursor after it.
///
/// # Example
///
/// ```
/// use viquill::editor::command_line::CommandLineInput;
///
/// let mut input = CommandLineInput::new(':');
/// input.type_char('w');
/// input.type_char('q');
/// assert_eq!(input.text(), ":wq");
/// assert_eq!(input.cursor(), 3);
///
/// input.backspace();
/// assert_eq!(input.submit(), ":w");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLineInput {
    text: Vec<char>,
    cursor: usize,
}

impl CommandLineInput {
    /// Creates an input seeded with `prefix` and the cursor at column 1.
    pub fn new(prefix: char) -> Self {
        Self {
            text: vec![prefix],
            cursor: 1,
        }
    }

    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Inserts `ch` at the cursor and moves past it.
    pub fn type_char(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += 1;
    }

    /// Deletes the character before the cursor. Does nothing at column 0.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.text.remove(self.cursor);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Takes the typed text, leaving the input empty.
    pub fn submit(&mut self) -> String {
        let text = self.text();
        self.clear();
        text
    }

    /// Discards the typed text.
    pub fn cancel(&mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

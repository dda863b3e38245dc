/// Word that toggles the shortest-path overlay when typed.
pub const TRIGGER_WORD: &str = "cc";

/// Bounded buffer of typed alphanumeric characters watching for the trigger word
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    buffer: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        InputBuffer {
            buffer: String::with_capacity(TRIGGER_WORD.len() + 1),
        }
    }

    /// Feed one typed character. Returns true when the trigger word was completed.
    ///
    /// Only ASCII letters and digits are recorded, lowercased. Completing the
    /// trigger clears the buffer; growing past the trigger length clears it too.
    pub fn feed(&mut self, ch: char) -> bool {
        if !ch.is_ascii_alphanumeric() {
            return false;
        }
        self.buffer.push(ch.to_ascii_lowercase());

        if self.buffer.ends_with(TRIGGER_WORD) {
            self.buffer.clear();
            true
        } else {
            if self.buffer.len() > TRIGGER_WORD.len() {
                self.buffer.clear();
            }
            false
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

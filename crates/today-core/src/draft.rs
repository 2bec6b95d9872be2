/// Text buffer behind the task entry field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    text: String,
}

impl TaskDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Empties the buffer and returns its trimmed content. The buffer is
    /// cleared even when the content is blank and no task will be added.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text).trim().to_string()
    }
}

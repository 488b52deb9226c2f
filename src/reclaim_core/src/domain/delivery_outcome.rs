/// What the mail service reports back after a send attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryOutcome {
    successful: bool,
    error_messages: Vec<String>,
}

impl DeliveryOutcome {
    pub fn delivered() -> Self {
        Self {
            successful: true,
            error_messages: Vec::new(),
        }
    }

    pub fn failed<I, S>(error_messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            successful: false,
            error_messages: error_messages.into_iter().map(Into::into).collect(),
        }
    }

    pub fn successful(&self) -> bool {
        self.successful
    }

    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }

    pub fn first_error(&self) -> Option<&str> {
        self.error_messages.first().map(String::as_str)
    }

    /// All error messages joined with a single space.
    pub fn joined_errors(&self) -> String {
        self.error_messages.join(" ")
    }
}

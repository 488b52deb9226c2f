use serde::{Serialize, Serializer};

/// Outcome reported to callers of the password recovery use cases.
///
/// Expected failures (unknown account, rejected delivery, bad token) are
/// reported as [`OperationResult::Failure`] with a message that is safe to
/// show to the end user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    Success,
    Failure(String),
}

impl OperationResult {
    pub fn success() -> Self {
        Self::Success
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Failure(message) => Some(message),
        }
    }
}

#[derive(Serialize)]
struct OperationResultBody<'a> {
    succeeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

impl Serialize for OperationResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        OperationResultBody {
            succeeded: self.is_success(),
            message: self.message(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_serializes_without_message() {
        let value = serde_json::to_value(OperationResult::success()).unwrap();
        assert_eq!(value, json!({ "succeeded": true }));
    }

    #[test]
    fn failure_serializes_with_message() {
        let value = serde_json::to_value(OperationResult::failure("nope")).unwrap();
        assert_eq!(value, json!({ "succeeded": false, "message": "nope" }));
    }
}

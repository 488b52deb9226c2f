/// Application details that end up in outgoing recovery emails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationInfo {
    /// Base URL the reset link points at, e.g. `https://app.example.com`
    pub application_url: String,
    pub app_name: String,
    pub company: String,
}

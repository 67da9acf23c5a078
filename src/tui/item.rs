use chrono::Local;

use crate::models::Session;
use crate::utils::strip_ansi_codes;

/// One row of the session list
///
/// Refers back to its [`Session`] by id only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableItem {
    title: String,
    description: String,
    session_id: String,
    filter_key: String,
}

impl SelectableItem {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        session_id: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let description = description.into();
        let filter_key = format!("{} {}", title, description);
        Self { title, description, session_id: session_id.into(), filter_key }
    }

    /// Title is the summary; description is `Session: <id> | <modified, local time>`
    pub fn from_session(session: &Session) -> Self {
        let session_id = strip_ansi_codes(&session.session_id);
        let description = format!(
            "Session: {} | {}",
            session_id,
            session.modified.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        );
        Self::new(strip_ansi_codes(&session.summary), description, session.session_id.clone())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Text the filter matches against: title and description joined by a space
    pub fn filter_key(&self) -> &str {
        &self.filter_key
    }
}

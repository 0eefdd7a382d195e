use crate::types::issue::IssueSeverity;
use crate::types::result::Message;

/// Fatal messages and error-level (`2`) messages are critical; everything
/// else is minor.
pub fn classify(message: &Message) -> IssueSeverity {
    if message.fatal == Some(true) || message.severity == Some(2) {
        IssueSeverity::Critical
    } else {
        IssueSeverity::Minor
    }
}

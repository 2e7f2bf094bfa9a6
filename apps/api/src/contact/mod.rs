// Contact relay: validated form submissions fan out as two SMTP sends,
// a notification to the owner and a confirmation to the submitter.

pub mod handlers;
pub mod mailer;

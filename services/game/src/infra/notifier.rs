use crate::domain::repository::Notifier;

/// Notification sink that records the message in the service log. Stands in
/// for the outbound mailer, which lives outside this service.
#[derive(Clone, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, recipient: &str, subject: &str, body: &str) {
        tracing::info!(recipient, subject, body, "notification dispatched");
    }
}

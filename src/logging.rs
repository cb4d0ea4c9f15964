use crate::{Flash, Severity};

/// A request-scoped logger for flash messages.
///
/// When the next request consumes a flash message, `FlashLog` records it
/// at the `tracing` level that matches its [`Severity`], tagged with the
/// request ID.
///
/// # Examples
///
/// ```
/// use flash_core::{Flash, FlashLog, Severity};
///
/// let log = FlashLog::new("req-42");
/// log.record(&Flash::with_level("disk full", Severity::Severe)); // logged at ERROR
/// assert_eq!(log.request_id(), "req-42");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FlashLog<'a> {
    request_id: &'a str,
}

impl<'a> FlashLog<'a> {
    /// Creates a logger for the given request ID.
    pub fn new(request_id: &'a str) -> Self {
        Self { request_id }
    }

    /// Returns the request ID associated with this logger.
    pub fn request_id(&self) -> &str {
        self.request_id
    }

    /// Records a consumed flash message.
    pub fn record(&self, flash: &Flash) {
        let severity = flash.severity();
        let cookie = flash.cookie_name();
        let text = flash.text();
        match severity {
            Severity::Severe => {
                tracing::error!(request_id = %self.request_id, %severity, cookie, "{}", text)
            }
            Severity::Warning => {
                tracing::warn!(request_id = %self.request_id, %severity, cookie, "{}", text)
            }
            Severity::Info | Severity::Config | Severity::Custom(_) => {
                tracing::info!(request_id = %self.request_id, %severity, cookie, "{}", text)
            }
            Severity::Fine => {
                tracing::debug!(request_id = %self.request_id, %severity, cookie, "{}", text)
            }
            Severity::Finer | Severity::Finest => {
                tracing::trace!(request_id = %self.request_id, %severity, cookie, "{}", text)
            }
        }
    }

    /// Records a flash cookie that could not be decoded.
    pub fn malformed(&self, cookie: &str, reason: &str) {
        tracing::warn!(request_id = %self.request_id, cookie, reason, "discarding malformed flash cookie");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_id_is_kept() {
        let log = FlashLog::new("req-1");
        assert_eq!(log.request_id(), "req-1");
    }

    #[test]
    fn record_every_severity_without_subscriber() {
        let log = FlashLog::new("req-2");
        for severity in [
            Severity::Severe,
            Severity::Warning,
            Severity::Info,
            Severity::Config,
            Severity::Fine,
            Severity::Finer,
            Severity::Finest,
            Severity::Custom("SUCCESS".to_string()),
        ] {
            log.record(&Flash::with_level("msg", severity));
        }
        log.malformed("RsFlash", "missing '/' separator");
    }
}

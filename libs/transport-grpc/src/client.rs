//! Client-side call configuration.
//!
//! Endpoint and handshake mechanics are out of scope here; the SDK clients
//! only need a service name for diagnostics and a per-call deadline for the
//! [`crate::call::unary`] wrapper.

use std::time::Duration;

/// Configuration for a bounded-context client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service name for logs and diagnostics.
    pub service_name: &'static str,

    /// Deadline applied to each unary call.
    pub call_deadline: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_name: "service_client",
            call_deadline: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with the given service name.
    pub fn new(service_name: &'static str) -> Self {
        Self {
            service_name,
            ..Self::default()
        }
    }

    /// Set the per-call deadline.
    #[must_use]
    pub fn with_call_deadline(mut self, deadline: Duration) -> Self {
        self.call_deadline = deadline;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.call_deadline, Duration::from_secs(30));
    }

    #[test]
    fn test_config_builder() {
        let cfg = ClientConfig::new("users").with_call_deadline(Duration::from_secs(5));
        assert_eq!(cfg.service_name, "users");
        assert_eq!(cfg.call_deadline, Duration::from_secs(5));
    }
}

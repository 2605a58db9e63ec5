#![forbid(unsafe_code)]

//! Outbound quote notification boundary and the referral-code helper.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Mutex;

/// Structured payload handed to the mail collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteNotification {
    /// Destination address.
    pub recipient: String,
    /// Tenant display name used in the subject line.
    pub tenant_name: String,
    /// Customer contact name.
    pub customer_name: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// Formatted quote total (localized upstream).
    pub quote_total: String,
}

/// Errors from the outbound mail collaborator.
///
/// Transient and retryable; a failed send never affects theming or
/// selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// The provider rejected the payload (bad address, policy).
    Rejected(String),
    /// Delivery failed in transit (network, provider outage).
    Transport(String),
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(msg) => write!(f, "notification rejected: {msg}"),
            Self::Transport(msg) => write!(f, "notification transport failed: {msg}"),
        }
    }
}

impl std::error::Error for NotifyError {}

/// Outbound transactional email boundary.
///
/// Consumed, never implemented here beyond test doubles; the real
/// sender lives with the excluded collaborators.
pub trait QuoteMailer {
    /// Dispatch one notification.
    fn send(&self, notification: &QuoteNotification) -> Result<(), NotifyError>;
}

/// Mailer that records payloads instead of sending them.
#[derive(Debug, Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<QuoteNotification>>,
}

impl RecordingMailer {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, in send order.
    #[must_use]
    pub fn sent(&self) -> Vec<QuoteNotification> {
        self.sent
            .lock()
            .expect("RecordingMailer lock poisoned")
            .clone()
    }
}

impl QuoteMailer for RecordingMailer {
    fn send(&self, notification: &QuoteNotification) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .expect("RecordingMailer lock poisoned")
            .push(notification.clone());
        Ok(())
    }
}

/// Referral code derived from customer identity fields.
///
/// `REF-` plus the first three letters of the name (uppercased) plus
/// the last four digits of the phone number. A name without letters
/// falls back to `NEW`; a phone without digits falls back to `0000`,
/// so the code is always well formed.
#[must_use]
pub fn referral_code(name: &str, phone: &str) -> String {
    let letters: String = name
        .chars()
        .filter(char::is_ascii_alphabetic)
        .take(3)
        .collect::<String>()
        .to_ascii_uppercase();
    let letters = if letters.is_empty() { "NEW" } else { &letters };

    let digits: Vec<char> = phone.chars().filter(char::is_ascii_digit).collect();
    let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
    let tail = if tail.is_empty() { "0000" } else { &tail };

    format!("REF-{letters}-{tail}")
}

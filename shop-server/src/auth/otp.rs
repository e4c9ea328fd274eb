//! One-time code verification
//!
//! Login is a mock: no code is ever sent. The verifier decides which code
//! is accepted for a phone number.

/// Decides whether a submitted one-time code is valid for a phone
pub trait OtpVerifier: Send + Sync + 'static {
    /// Digits the client should prompt for
    fn code_length(&self) -> usize;

    fn verify(&self, phone: &str, code: &str) -> bool;
}

/// Accepts one configured code for every phone
#[derive(Debug, Clone)]
pub struct FixedCodeVerifier {
    code: String,
}

impl FixedCodeVerifier {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl OtpVerifier for FixedCodeVerifier {
    fn code_length(&self) -> usize {
        self.code.len()
    }

    fn verify(&self, _phone: &str, code: &str) -> bool {
        code.trim() == self.code
    }
}

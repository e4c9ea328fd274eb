//! Session identity
//!
//! Mock phone login. The role comes from comparing the phone with the
//! reserved admin number; the logged-in user is kept under
//! [`keys::USER`] until logout.

use shared::models::{LoginResponse, OtpRequested, User, UserRole};
use std::sync::Arc;

use crate::auth::{JwtService, OtpVerifier};
use crate::db::{Storage, keys};
use crate::security_log;
use crate::utils::validation::is_valid_phone;
use crate::utils::{AppError, AppResult, ErrorCode};

const ADMIN_NAME: &str = "Admin User";
const CUSTOMER_NAME: &str = "Customer";

#[derive(Clone)]
pub struct IdentityService {
    storage: Storage,
    verifier: Arc<dyn OtpVerifier>,
    jwt: Arc<JwtService>,
    admin_phone: String,
}

impl std::fmt::Debug for IdentityService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityService").finish_non_exhaustive()
    }
}

impl IdentityService {
    pub fn new(
        storage: Storage,
        verifier: Arc<dyn OtpVerifier>,
        jwt: Arc<JwtService>,
        admin_phone: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            verifier,
            jwt,
            admin_phone: admin_phone.into(),
        }
    }

    /// Step 1: check the phone and "send" a code
    pub fn request_otp(&self, phone: &str) -> AppResult<OtpRequested> {
        let phone = phone.trim();
        ensure_phone(phone)?;

        tracing::debug!(phone, "One-time code requested");
        Ok(OtpRequested {
            phone: phone.to_string(),
            code_length: self.verifier.code_length(),
        })
    }

    /// Step 2: verify the code, persist the user and issue a token
    pub fn verify(&self, phone: &str, code: &str) -> AppResult<LoginResponse> {
        let phone = phone.trim();
        ensure_phone(phone)?;

        if !self.verifier.verify(phone, code) {
            security_log!("WARN", "otp_rejected", phone = phone.to_string());
            return Err(AppError::new(ErrorCode::VerificationCodeInvalid));
        }

        let user = self.user_for(phone);
        self.storage.write(keys::USER, &user)?;

        let token = self
            .jwt
            .generate_token(&user)
            .map_err(|e| AppError::internal(e.to_string()))?;

        security_log!(
            "INFO",
            "login",
            phone = user.phone.clone(),
            role = user.role.as_str()
        );
        Ok(LoginResponse {
            user,
            token,
            expires_in: self.jwt.expires_in_seconds(),
        })
    }

    /// The persisted user, if anyone is logged in
    pub fn current_user(&self) -> Option<User> {
        self.storage.read(keys::USER)
    }

    pub fn logout(&self) -> AppResult<()> {
        self.storage.remove(keys::USER)?;
        Ok(())
    }

    fn user_for(&self, phone: &str) -> User {
        if phone == self.admin_phone {
            User {
                name: ADMIN_NAME.to_string(),
                phone: phone.to_string(),
                role: UserRole::Admin,
            }
        } else {
            User {
                name: CUSTOMER_NAME.to_string(),
                phone: phone.to_string(),
                role: UserRole::Customer,
            }
        }
    }
}

fn ensure_phone(phone: &str) -> AppResult<()> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        Err(AppError::with_message(
            ErrorCode::InvalidPhone,
            "Please enter a valid 10-digit phone number",
        ))
    }
}

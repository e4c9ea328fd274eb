//! Contact inquiries, stored most recent first

use chrono::Utc;
use shared::models::{Inquiry, InquiryCreate};
use shared::util::new_id;

use crate::db::{Storage, keys};
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_required_text,
};

#[derive(Debug, Clone)]
pub struct InquiryService {
    storage: Storage,
}

impl InquiryService {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub fn submit(&self, input: InquiryCreate) -> AppResult<Inquiry> {
        validate_required_text(&input.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&input.phone, "phone", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&input.message, "message", MAX_NOTE_LEN)?;

        let inquiry = Inquiry {
            id: new_id(),
            name: input.name.trim().to_string(),
            phone: input.phone.trim().to_string(),
            message: input.message.trim().to_string(),
            date: Utc::now(),
        };
        self.storage.prepend(keys::INQUIRIES, inquiry.clone())?;

        tracing::info!(inquiry_id = %inquiry.id, "Inquiry received");
        Ok(inquiry)
    }

    pub fn list(&self) -> Vec<Inquiry> {
        self.storage.read_list(keys::INQUIRIES)
    }
}

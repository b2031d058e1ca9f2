//! Contact Form
//!
//! Client-side check of the contact form. Messages are not sent anywhere.

use crate::error::{ShopError, ShopResult};

pub const INCOMPLETE_MESSAGE: &str = "กรุณากรอกข้อมูลให้ครบถ้วน";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Thank-you status when every field is filled in
    pub fn submit(&self) -> ShopResult<String> {
        let filled = [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty());
        if !filled {
            return Err(ShopError::Contact(INCOMPLETE_MESSAGE.to_string()));
        }
        Ok(format!(
            "ขอบคุณ, {}! ข้อความของคุณถูกส่งแล้ว (จำลองการส่ง)",
            self.name.trim()
        ))
    }
}

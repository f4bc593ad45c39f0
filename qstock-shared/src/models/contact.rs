use serde::{Deserialize, Serialize};

use crate::pii::PhoneNumber;

/// Identity of a party in the network: a requesting buyer or a quoting seller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub city: String,
    pub phone: PhoneNumber,
}

impl Contact {
    pub fn new(name: impl Into<String>, city: impl Into<String>, phone: impl Into<PhoneNumber>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            city: city.into().trim().to_string(),
            phone: phone.into(),
        }
    }

    /// Name and phone are mandatory on every submitted form; city is optional.
    pub fn missing_required_field(&self) -> Option<&'static str> {
        if self.name.is_empty() {
            Some("name")
        } else if self.phone.is_blank() {
            Some("phone")
        } else {
            None
        }
    }
}

use qstock_shared::Contact;

use crate::ledger::RfqError;
use crate::models::NewRfqItem;

/// The buyer's RFQ form: lines are collected one at a time, then sent together
#[derive(Debug, Clone)]
pub struct RfqDraft {
    requester: Contact,
    items: Vec<NewRfqItem>,
}

impl RfqDraft {
    /// Start a form prefilled with the current user's contact
    pub fn new(requester: Contact) -> Self {
        Self {
            requester,
            items: Vec::new(),
        }
    }

    pub fn requester(&self) -> &Contact {
        &self.requester
    }

    pub fn set_requester(&mut self, requester: Contact) {
        self.requester = requester;
    }

    pub fn items(&self) -> &[NewRfqItem] {
        &self.items
    }

    pub fn add_item(&mut self, item: NewRfqItem) -> Result<(), RfqError> {
        if let Some(reason) = item.invalid_reason() {
            return Err(RfqError::Validation(reason));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn remove_item(&mut self, index: usize) -> Option<NewRfqItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Drops every line, keeping the requester
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

pub mod models;
pub mod pii;

pub use models::contact::Contact;
pub use pii::PhoneNumber;

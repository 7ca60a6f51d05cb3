//! Contact storage and birthday scheduling.

pub mod address_book;
pub mod upcoming;

pub use address_book::AddressBook;
pub use upcoming::{UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW_DAYS};

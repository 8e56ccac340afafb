// Models module - Database entity representations

pub mod booking;
pub mod card;
pub mod reference;
pub mod user;

pub use booking::Booking;
pub use card::Card;
pub use user::User;

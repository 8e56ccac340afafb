// Services module - pure domain helpers shared by the handlers

pub mod card_number;
pub mod login;
pub mod password;
pub mod search;

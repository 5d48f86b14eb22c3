pub mod category;
pub mod prices;
pub mod token;

pub mod reveal;
pub mod stat_card;
pub mod table;
pub mod ui;

pub use reveal::Reveal;
pub use stat_card::StatCard;

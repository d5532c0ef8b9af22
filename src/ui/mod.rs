pub mod display;
pub mod font;
pub mod menu;
pub mod messages;
pub mod notify;
pub mod terminal;

pub mod countdown;
pub mod menu;
pub mod progress;
pub mod tracker;

pub mod health;
pub mod menu;
pub mod preferences;
pub mod recommendation;
pub mod server;

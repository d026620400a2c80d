pub mod message;
pub mod state;

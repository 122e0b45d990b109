mod state;

pub use state::{UpdateStateCell, is_newer_version};

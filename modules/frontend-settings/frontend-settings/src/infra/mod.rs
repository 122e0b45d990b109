pub mod plugins;
pub mod storage;
pub mod updates;

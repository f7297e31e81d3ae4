pub mod colors;
pub mod download;
pub mod location;
pub mod session_storage;

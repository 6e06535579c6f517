pub mod cli;
pub mod logging;
pub mod manifest;
pub mod version;

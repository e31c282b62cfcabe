pub mod codec_driver;
pub mod file_store;
pub mod settings_store;

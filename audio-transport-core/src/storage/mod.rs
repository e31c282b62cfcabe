pub mod dir_store;
pub mod settings_file;
pub mod wav_writer;

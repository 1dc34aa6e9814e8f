pub mod text_buffer;
pub mod unicode;

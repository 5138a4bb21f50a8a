pub mod bmp_file_reader;
pub mod bmp_file_writer;

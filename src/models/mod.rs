pub mod locale_file;

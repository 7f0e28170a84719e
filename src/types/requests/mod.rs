pub mod translate_request;

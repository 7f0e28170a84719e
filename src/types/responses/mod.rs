pub mod translate_response;

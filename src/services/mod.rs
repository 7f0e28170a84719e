pub mod sync_service;
pub mod translation_service;

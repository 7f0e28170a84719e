pub mod locale_repository;

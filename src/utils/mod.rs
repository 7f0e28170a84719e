pub mod locale_utils;
pub mod tree_utils;

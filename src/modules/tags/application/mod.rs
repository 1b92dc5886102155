pub mod domain;
pub mod ports;
pub mod tag_use_cases;

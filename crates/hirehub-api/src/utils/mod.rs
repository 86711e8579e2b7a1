//! 공용 유틸리티 모듈.

pub mod multipart;
pub mod parse;

pub use multipart::{FormData, UploadedFile};
pub use parse::{parse_skills, split_requirements, NumberOrText};

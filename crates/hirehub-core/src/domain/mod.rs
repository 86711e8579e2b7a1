//! 도메인 모델.
//!
//! 엔티티 그래프: User → Company → Job → Application.
//! 소유 엣지(`user_id`, `created_by`)는 변이 권한의 기준이 됩니다.

pub mod application;
pub mod company;
pub mod job;
pub mod role;
pub mod user;

pub use application::Application;
pub use company::Company;
pub use job::{ExperienceBand, ExperienceLevel, Job};
pub use role::Role;
pub use user::{Profile, User};

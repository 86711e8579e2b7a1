//! Repository pattern for database operations.
//!
//! 데이터베이스 접근 로직을 라우트 핸들러에서 분리하여 관리합니다.
//! 모든 Repository는 static methods 패턴을 사용합니다.

pub mod applications;
pub mod companies;
pub mod jobs;
pub mod users;

pub use applications::ApplicationRepository;
pub use companies::{CompanyChanges, CompanyRepository};
pub use jobs::{JobRecord, JobRepository, NewJob};
pub use users::{NewUser, ProfileChanges, UserRecord, UserRepository};

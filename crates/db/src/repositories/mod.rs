//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod about_repo;
pub mod category_repo;
pub mod download_repo;
pub mod main_card_repo;
pub mod notice_repo;
pub mod page_section_repo;
pub mod portfolio_repo;

pub use about_repo::AboutRepo;
pub use category_repo::CategoryRepo;
pub use download_repo::DownloadRepo;
pub use main_card_repo::MainCardRepo;
pub use notice_repo::NoticeRepo;
pub use page_section_repo::PageSectionRepo;
pub use portfolio_repo::PortfolioRepo;

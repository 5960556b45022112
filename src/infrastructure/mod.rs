//! Provider adapters and logging backends.

pub mod bar_records;
pub mod services;
pub mod static_repository;

pub use bar_records::{BarRecordDto, parse_series};
pub use services::{ConsoleLogger, MemoryLogger, SystemTimeProvider};
pub use static_repository::StaticRepository;

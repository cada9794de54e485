pub mod config;
pub mod course;
pub mod dashboard;
pub mod error;
pub mod page;
pub mod storage;
pub mod user;

pub use config::*;
pub use course::*;
pub use dashboard::*;
pub use error::*;
pub use page::*;
pub use storage::*;
pub use user::*;

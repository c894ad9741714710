pub mod apps;
pub mod conversations;
pub mod schedule;

mod appresult;
pub use appresult::{AppError, AppResult};

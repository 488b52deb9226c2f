pub mod application_info;
mod cancellation;
pub mod use_cases;

pub use application_info::ApplicationInfo;
pub use use_cases::*;

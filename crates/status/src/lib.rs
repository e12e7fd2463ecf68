mod checker;
mod errors;
mod http;
mod normalize;
mod response;

pub use checker::{Sleep, StatusApi, StatusChecker, TokioSleep};
pub use errors::FetchError;
pub use http::{HttpStatusApi, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use normalize::normalize;
pub use response::*;

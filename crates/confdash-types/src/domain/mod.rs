pub mod affiliation;
pub mod conference;
pub mod session;
pub mod stats;

pub use affiliation::*;
pub use conference::*;
pub use session::*;
pub use stats::*;

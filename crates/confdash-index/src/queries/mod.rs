pub mod affiliation;
pub mod conference;
pub mod instance;
pub mod session;
pub mod stats;

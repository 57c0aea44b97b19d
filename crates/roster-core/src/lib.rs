pub mod error;
pub mod member;
pub mod response;
pub mod source;

pub use error::{Result, RosterError};
pub use member::{Member, MemberId, MemberSummary, Roster};
pub use response::ApiResponse;
pub use source::RosterSource;

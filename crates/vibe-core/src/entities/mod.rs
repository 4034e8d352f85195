//! Entity structs for MatchVibe domain objects.
//!
//! `Question` and `ResponseRecord` mirror the rows the orchestrating service
//! loads from its datastore. `MatchResult` is the immutable record it persists
//! once per session. All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` so they can be validated at the boundary.

mod match_result;
mod question;
mod response;
mod session;

pub use match_result::MatchResult;
pub use question::Question;
pub use response::{Response, ResponseRecord};
pub use session::SessionInput;

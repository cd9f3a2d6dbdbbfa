//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, transport, etc.).
//!
//! # Structure
//!
//! - `user` - Profiles and roles (`User`, `NewUser`, `Role`)
//! - `caller` - Resolved request identities (`Caller`, `AdminCaller`)
//! - `test_case` - Test cases and their assignment/disabled state
//! - `progress` - Per-(user, test) completion records
//! - `card_link` - Cached project-tracker cards linked to tests

mod caller;
mod card_link;
mod progress;
mod test_case;
mod user;

pub use caller::{AdminCaller, Caller};
pub use card_link::CardLink;
pub use progress::{Progress, ProgressSummary, ProgressUpdate};
pub use test_case::{NewTestCase, TestCase};
pub use user::{NewUser, Role, UnknownRole, User};

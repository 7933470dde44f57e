//! ITS API service wrappers, one per resource family.

mod events;
mod examinees;
mod forms;
mod institutions;
mod item_workshop;
mod orders;
mod registrations;
mod remote;
mod results;
mod sessions;
mod system;
mod testing;
mod users;

pub use events::*;
pub use examinees::*;
pub use forms::*;
pub use institutions::*;
pub use item_workshop::*;
pub use orders::*;
pub use registrations::*;
pub use remote::*;
pub use results::*;
pub use sessions::*;
pub use system::*;
pub use testing::*;
pub use users::*;

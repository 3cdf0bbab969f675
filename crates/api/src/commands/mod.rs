//! Commands - frontend to backend bridge

mod analytics;
mod payments;
mod records;
mod selection;
mod threads;
mod users;
mod workspace;

pub use analytics::*;
pub use payments::*;
pub use records::*;
pub use selection::*;
pub use threads::*;
pub use users::*;
pub use workspace::*;

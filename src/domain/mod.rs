pub mod event;
pub mod member;
pub mod participant;
pub mod snapshot;

pub use event::*;
pub use member::*;
pub use participant::*;
pub use snapshot::*;

pub mod changes;
pub mod dashboard;
pub mod events;
pub mod members;
pub mod root;

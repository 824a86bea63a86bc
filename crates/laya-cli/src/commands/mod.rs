pub mod flow;
pub mod gift;
pub mod home;
pub mod memory;
pub mod nav;
pub mod plan;
pub mod profile;

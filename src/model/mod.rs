pub mod error;
pub mod master;
pub mod record;

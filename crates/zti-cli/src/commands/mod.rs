pub mod dispatch;
pub mod host;
pub mod hosts;
pub mod list;
pub mod schema;
pub mod status;

pub use dispatch::dispatch;

pub mod error;
pub mod feature_flags;

// Session and directory types
pub mod models;
pub mod permissions;
pub mod view;

// Console domain modules
pub mod customer;
pub mod notification;

pub use error::*;
pub use feature_flags::*;
pub use models::*;
pub use permissions::*;
pub use view::*;

pub use customer::*;
pub use notification::*;

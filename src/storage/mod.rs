pub mod file;
pub mod memory;
pub mod session;
pub mod traits;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use session::SessionStore;
pub use traits::KeyValueStore;

/// Fixed keys for the per-session records
pub const FAVORITES_KEY: &str = "campusmatch_favorites";
pub const USER_KEY: &str = "campusmatch_user";
pub const BOOKINGS_KEY: &str = "campusmatch_bookings";

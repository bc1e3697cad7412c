pub mod commands;
pub mod handlers;
pub mod session;

pub use commands::Command;
pub use handlers::ConsoleError;
pub use handlers::ConsoleReply;
pub use session::Console;

// Chat export records and loading

pub mod loader;
pub mod model;

pub use loader::ExportPackage;
pub use model::{mask_email, Conversation, Message, MessageNode, Role, TimestampMs, UserRecord};

pub mod agenda;
pub mod chat;
pub mod shared;
pub mod sidebar;

pub use agenda::AgendaView;
pub use chat::ChatPanel;
pub use sidebar::Sidebar;

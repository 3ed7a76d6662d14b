pub mod page_shell;
pub mod view_toggle;

pub use page_shell::PageShell;
pub use view_toggle::ViewToggle;

pub mod footer;
pub mod form;
pub mod header;
pub mod layout;
pub mod page;
pub mod protected_layout;
pub mod theme_toggle;

pub use footer::Footer;
pub use form::{FormError, TextArea, TextInput};
pub use header::Header;
pub use layout::Layout;
pub use page::Page;
pub use protected_layout::RequiresSignedIn;
pub use theme_toggle::ThemeToggle;

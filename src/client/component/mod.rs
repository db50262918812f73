pub mod countdown;
pub mod header;
pub mod layout;
pub mod modal;
pub mod page;
pub mod pagination;
pub mod protected_layout;

pub use countdown::PrayerCountdown;
pub use header::Header;
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use page::Page;
pub use pagination::{Pagination, PaginationData};
pub use protected_layout::RequiresAdmin;

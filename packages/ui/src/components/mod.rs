//! Reusable building blocks shared by the sections.

mod button;
pub use button::{Button, ButtonVariant};

mod field;
pub use field::{read_uploads, Field};

mod modal;
pub use modal::{ConfirmDialog, ModalOverlay};

mod lightbox;
pub use lightbox::Lightbox;

mod header;
pub use header::Header;

mod navbar;
pub use navbar::Navbar;

mod footer;
pub use footer::Footer;

mod team_card;
pub use team_card::TeamCard;

mod event_card;
pub use event_card::{EventCard, EventDetail};

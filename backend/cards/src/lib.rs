//! Reply cards for the guest-service bot.
//!
//! Every card is a pure function of the [`PropertyProfile`](hellostay_config::PropertyProfile):
//! colors, links, phone number and WiFi credentials all come from it.

pub mod blocks;
pub mod directions;
pub mod faq;
pub mod keys;
pub mod menus;
pub mod template;

pub use keys::{PostbackKey, UnrecognizedKey};
pub use template::{Template, UnknownTemplate};

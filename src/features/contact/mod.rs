//! Contact form.
//!
//! Same discipline as testimonials with its own attempt budget (5 per hour):
//! rate limit, then field checks. An accepted request is handed off to
//! WhatsApp with a prefilled summary; nothing is stored.

pub mod dtos;
pub mod services;
pub mod whatsapp;

pub use dtos::ContactRequestDto;
pub use services::{ContactReceipt, ContactService};
pub use whatsapp::WhatsAppLink;

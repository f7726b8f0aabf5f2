//! # La Vie Esbella site core
//!
//! Input hygiene and the local submission store behind the spa's marketing
//! site, plus the small axum server that hosts the built pages.
//!
//! - [`shared::sanitize`] and [`shared::validation`]: pure input cleaning and
//!   field checks.
//! - [`features::rate_limits`]: sliding-window attempt counting per action.
//! - [`features::testimonials`]: duplicate guard, submission store and the
//!   testimonial form flow.
//! - [`features::contact`]: contact form flow and WhatsApp deep links.
//! - [`modules::storage`]: the key-value boundary every ledger goes through.
//! - [`core::app`]: the site server (static pages, maintenance notice,
//!   security headers).

pub mod core;
pub mod features;
pub mod modules;
pub mod shared;

use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::testimonials::models::Testimonial;
use crate::features::testimonials::seed::{featured_testimonials, is_seed_id};
use crate::modules::storage::{read_ledger, write_ledger, KeyValueStore};
use crate::shared::constants::APPROVED_TESTIMONIALS_KEY;

/// Append-only record of accepted visitor testimonials
pub struct TestimonialStore {
    store: Arc<dyn KeyValueStore>,
}

impl TestimonialStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Visitor testimonials in submission order
    pub fn list_submitted(&self) -> Result<Vec<Testimonial>> {
        Ok(read_ledger(self.store.as_ref(), APPROVED_TESTIMONIALS_KEY)?)
    }

    /// Showcase testimonials followed by visitor ones. Falls back to the
    /// showcase alone when the ledger cannot be read.
    pub fn list_all(&self) -> Vec<Testimonial> {
        let mut all = featured_testimonials();
        match self.list_submitted() {
            Ok(submitted) => all.extend(submitted),
            Err(e) => tracing::warn!(error = %e, "Submitted testimonials unavailable"),
        }
        all
    }

    pub fn append(&self, testimonial: Testimonial) -> Result<()> {
        let mut submitted = self.list_submitted()?;
        submitted.push(testimonial);
        write_ledger(self.store.as_ref(), APPROVED_TESTIMONIALS_KEY, &submitted)?;
        Ok(())
    }

    /// Remove a visitor testimonial. Showcase entries are refused.
    pub fn delete(&self, id: &str) -> Result<Testimonial> {
        if is_seed_id(id) {
            return Err(AppError::Forbidden(format!(
                "Testimonial '{}' cannot be deleted",
                id
            )));
        }

        let mut submitted = self.list_submitted()?;
        let position = submitted
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Testimonial '{}' not found", id)))?;

        if !submitted[position].deletable {
            return Err(AppError::Forbidden(format!(
                "Testimonial '{}' cannot be deleted",
                id
            )));
        }

        let removed = submitted.remove(position);
        write_ledger(self.store.as_ref(), APPROVED_TESTIMONIALS_KEY, &submitted)?;

        tracing::info!("Testimonial deleted: id={}", removed.id);
        Ok(removed)
    }
}

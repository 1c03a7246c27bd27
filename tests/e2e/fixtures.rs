//! Sample drafts for end-to-end tests.

use contact_manager::ContactDraft;

/// A draft with every field filled in.
pub fn sample_draft(name: &str, email: &str) -> ContactDraft {
    ContactDraft::new(name, email)
        .with_phone("(555) 010-0100")
        .with_address("Calle Mayor 5")
}

/// A draft with only the required fields.
#[allow(dead_code)]
pub fn minimal_draft(name: &str, email: &str) -> ContactDraft {
    ContactDraft::new(name, email)
}

//! Id generation for elements and share tokens.
//!
//! Element ids only need to be unique within a single form, so a short
//! random hex string keeps the serialized content compact. Share tokens are
//! public, long-lived identifiers and use a full UUID.

use rand::Rng;

/// Generates a short random id for a form element.
///
/// Ids are eight lowercase hex characters, unique enough within a single
/// form's element sequence. Collisions are guarded against by the designer
/// container, which rejects duplicate ids on insert.
pub fn element_id() -> String {
    let mut rng = rand::thread_rng();
    let n: u32 = rng.gen();
    format!("{n:08x}")
}

/// Generates an opaque share token for a published form.
///
/// The token is stable for the form's lifetime once assigned.
pub fn share_token() -> String {
    uuid::Uuid::new_v4().to_string()
}

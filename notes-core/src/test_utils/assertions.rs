//! Assertions over note collections and service results

use crate::core_notes::store::listing_order;
use crate::core_notes::{Note, NoteServiceError, NoteServiceResult};
use std::cmp::Ordering;
use std::fmt::Debug;

/// Assert that a Result is Ok and return the value
pub fn assert_ok<T, E: Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("Expected Ok, got Err: {:?}", e),
    }
}

/// Assert that `notes` are in listing order: most recently updated first
pub fn assert_listing_order(notes: &[Note]) {
    for pair in notes.windows(2) {
        if listing_order(&pair[0], &pair[1]) == Ordering::Greater {
            panic!(
                "Notes out of order: {} (updated {}) listed before {} (updated {})",
                pair[0].id, pair[0].updated_at, pair[1].id, pair[1].updated_at
            );
        }
    }
}

/// Assert a validation failure on `field`
pub fn assert_validation_failed<T: Debug>(result: NoteServiceResult<T>, field: &str) {
    match result {
        Err(NoteServiceError::Validation(err)) if err.field() == field => {}
        other => panic!("Expected validation failure on {}, got {:?}", field, other),
    }
}

/// Assert a not-found failure
pub fn assert_not_found<T: Debug>(result: NoteServiceResult<T>) {
    match result {
        Err(NoteServiceError::NotFound(_)) => {}
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

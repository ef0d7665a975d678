//! Preconfigured conversational agents bound to hosted language models.
//!

pub use aster_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use aster_internal::prelude::*;
}

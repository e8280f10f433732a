//! # Solvix
//!
//! Numeric kernel for a calculator front end: dense matrix arithmetic,
//! determinants, inversion, and closed-form equation solving.
//!
//! One `use solvix::prelude::*;` gives you the matrix type, the linear
//! algebra and equation free functions, and the [`Kernel`](core::Kernel)
//! dispatcher.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | Matrices, linear algebra, equation solvers |

#[cfg(feature = "core")]
pub use solvix_core as core;

/// Glob-import convenience: `use solvix::prelude::*;`
pub mod prelude {
    #[cfg(feature = "core")]
    pub use solvix_core::prelude::*;
}

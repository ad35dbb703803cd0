//! # typed-accessors
//!
//! Typed property accessors for structs - generated readers and coercing
//! writers for a small fixed set of semantic types:
//!
//! - **`bool_yn`** - boolean "yes/no" flags parsed from text
//! - **`float`** - floating-point numbers (`f64`)
//! - **`int`** - integers (`i64`)
//! - **`date`** - calendar dates (`chrono::NaiveDate`)
//!
//! Apply `#[typed_accessors]` to a struct and mark fields with
//! `#[accessor(..)]`, `#[reader(..)]`, or `#[writer(..)]`. Each marked
//! field becomes a storage slot (`Option<T>`, `None` until first write)
//! with a generated reader returning the slot as-is and/or a generated
//! writer that coerces raw input into the slot type.
//!
//! ## Example
//!
//! ```rust
//! use typed_accessors::typed_accessors;
//!
//! #[typed_accessors]
//! #[derive(Default)]
//! pub struct Sensor {
//!     #[accessor(float)]
//!     distance: Option<f64>,
//!     #[accessor(int)]
//!     count: Option<i64>,
//!     #[accessor(bool_yn)]
//!     onfire: Option<bool>,
//!     #[accessor(date)]
//!     day: Option<chrono::NaiveDate>,
//! }
//!
//! let mut sensor = Sensor::default();
//! sensor.set_distance("12.5").unwrap();
//! assert_eq!(sensor.distance(), Some(12.5));
//!
//! sensor.set_onfire("YES");
//! assert_eq!(sensor.onfire(), Some(true));
//! ```
//!
//! Writers for `float`, `int`, and `date` return `Result`; a failed write
//! leaves the slot untouched. The `bool_yn` writer is total and never
//! fails.

pub mod coerce;
mod error;
mod input;

pub use error::AccessorError;
pub use input::{BoolYnInput, DateInput, FloatInput, IntInput};

// Re-export the attribute macro
#[cfg(feature = "macros")]
pub use typed_accessors_macros::typed_accessors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{AccessorError, BoolYnInput, DateInput, FloatInput, IntInput};

    #[cfg(feature = "macros")]
    pub use typed_accessors_macros::typed_accessors;
}

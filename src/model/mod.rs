//! Row types for the trust's tables, form inputs and procedure results.
//!
//! Field names follow the column names, so these structs deserialize straight
//! from backend rows. Relations loaded through embedding are `Option`s that stay
//! `None` when the query did not ask for them.

mod entities;
mod enums;
mod forms;
mod reports;

pub use entities::*;
pub use enums::*;
pub use forms::*;
pub use reports::*;

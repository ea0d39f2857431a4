//! Rule implementations for tscat.
//!
//! Each rule is a pure function over loaded catalogs returning one issue type.
//!
//! ## Module Structure
//!
//! - `helpers`: Shared helpers (issue context construction)
//! - `unfinished`: Translations still marked unfinished
//! - `placeholder`: `%N` placeholders that differ between source and translation
//! - `duplicate`: Same source translated differently within a context
//! - `plural_forms`: Numerus translations with the wrong number of forms
//! - `vanished`: Vanished/obsolete messages kept in the file

pub mod duplicate;
pub mod helpers;
pub mod placeholder;
pub mod plural_forms;
pub mod unfinished;
pub mod vanished;

pub use duplicate::check_duplicate_issues;
pub use placeholder::check_placeholder_issues;
pub use plural_forms::check_plural_forms_issues;
pub use unfinished::check_unfinished_issues;
pub use vanished::check_vanished_issues;

//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error and diagnostic types     |
//! | `field`  | Static and indexed field paths               |
//! | `status` | Field status validation                      |

mod error;
mod field;
mod status;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, DiagnosticKind};
pub use field::{FieldLocation, FieldPath};
pub use status::{FieldStatus, check_field_status, check_section_status};

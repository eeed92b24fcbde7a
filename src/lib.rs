//! Option and Result sum types for code that represents absence and failure as values.
//!
//! ```
//! use fortis::{func::try_parse, Option, Result};
//!
//! let port = Option::some("8080").and_then(try_parse::<u16>).with_default(80);
//! assert_eq!(port, 8080);
//!
//! let checked = Result::<String, i32>::success(5).map(|v| v.to_string());
//! assert_eq!(checked, Result::success("5".to_string()));
//! ```

mod error;
pub mod func;
mod guard;
pub mod lookup;
pub mod native;
mod nullable;
pub mod option;
pub mod result;
pub mod sequence;
mod unit;

pub use error::GuardError;
pub use lookup::Lookup;
pub use native::{NativeOptionExt, NativeResultExt};
pub use nullable::Nullable;
pub use option::Option;
pub use result::{errors, successes, Result};
pub use sequence::{choose, partition, pick, SequenceExt};
pub use unit::Unit;

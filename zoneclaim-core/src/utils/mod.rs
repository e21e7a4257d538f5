//! 工具模块

mod cancel;
mod reference;

pub use cancel::CancellationFlag;
pub use reference::{CreationReferenceGenerator, MAX_REFERENCE_LEN};

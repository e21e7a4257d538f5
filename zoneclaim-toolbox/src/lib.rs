//! Network toolbox utilities for zoneclaim
//!
//! 提供无状态的网络查询工具：WHOIS（含未注册识别）、NS 记录探测。
//! 独立于 hosted zone 业务逻辑。

mod error;
mod services;
mod types;

pub use error::{ToolboxError, ToolboxResult};
pub use services::{ToolboxService, normalize_domain};
pub use types::{NsProbeOutcome, NsProbeResult, WhoisResult};

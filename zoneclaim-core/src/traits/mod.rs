//! Collaborator traits
//!
//! 网络查询、凭证、运营者交互都通过这些 trait 注入，便于平台层替换与测试。

mod connector;
mod decision;
mod lookup;
mod progress;

pub use connector::ProviderConnector;
pub use decision::DecisionProvider;
pub use lookup::{NsProbe, WhoisSource};
pub use progress::{NoopProgress, ProgressSink};

//! NS 探测用的 resolver 构造

use std::time::Duration;

use hickory_resolver::{
    TokioResolver,
    config::{ResolverConfig, ResolverOpts},
    name_server::TokioConnectionProvider,
};

/// Per-query timeout for NS probes.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);
/// Attempts per nameserver before giving up.
const PROBE_ATTEMPTS: usize = 2;

fn probe_options(mut opts: ResolverOpts) -> ResolverOpts {
    opts.timeout = PROBE_TIMEOUT;
    opts.attempts = PROBE_ATTEMPTS;
    // 每次探测都要看到当前状态
    opts.cache_size = 0;
    opts
}

/// Resolver on the host configuration (`/etc/resolv.conf` or the Windows registry).
///
/// Hickory's built-in upstreams are used when the host configuration cannot be read.
pub(crate) fn probe_resolver() -> TokioResolver {
    match TokioResolver::builder_tokio() {
        Ok(mut builder) => {
            let opts = builder.options_mut();
            *opts = probe_options(opts.clone());
            builder.build()
        }
        Err(e) => {
            log::warn!("No usable system DNS configuration ({e}), using built-in upstreams");
            TokioResolver::builder_with_config(
                ResolverConfig::default(),
                TokioConnectionProvider::default(),
            )
            .with_options(probe_options(ResolverOpts::default()))
            .build()
        }
    }
}

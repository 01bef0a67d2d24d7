/// Default ceiling for eager expansion, one `/16` worth of addresses.
pub const DEFAULT_MAX_ADDRESSES: u64 = 65_536;

pub struct Config {
    /// Verbosity reduction. `1` hides headers, `2` prints bare data only.
    pub quiet: u8,
    /// Enables debug logging.
    pub verbose: bool,
    /// Upper bound on how many addresses an eager expansion may materialize.
    ///
    /// `None` disables the check.
    pub max_addresses: Option<u64>,
    pub no_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiet: 0,
            verbose: false,
            max_addresses: Some(DEFAULT_MAX_ADDRESSES),
            no_color: false,
        }
    }
}

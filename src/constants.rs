//! Central repository for workflow pacing and paging constants

/// Pauses between lifecycle steps of one instance cycle
pub mod pacing {
    use std::time::Duration;

    /// Grace period after the save command before stopping the instance
    pub const SAVE_GRACE: Duration = Duration::from_secs(120);

    /// Grace period after the stop call for the process to fully terminate
    pub const STOP_GRACE: Duration = Duration::from_secs(120);
}

/// Instance listing parameters
pub mod paging {
    /// Page requested from the instance listing endpoint
    pub const INSTANCE_PAGE: u32 = 1;

    /// Instances fetched per daemon
    pub const INSTANCE_PAGE_SIZE: u32 = 10;
}

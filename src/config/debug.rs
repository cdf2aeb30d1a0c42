//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log each generated series (spec, end date, first/last values).
    pub log_generation: bool,

    /// Warn when a frame blows the budget in `constants::FRAME_BUDGET_MICROS`.
    pub log_performance: bool,

    /// Log theme switches and other global shortcut hits.
    pub log_shortcuts: bool,

    /// Log state save/restore round trips.
    pub log_persistence: bool,
}

pub const DF: LogFlags = LogFlags {
    log_generation: true,

    log_performance: false,
    log_shortcuts: false,
    log_persistence: false,
};

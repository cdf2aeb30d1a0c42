//! File persistence configuration.

/// Configuration for application state persistence.
pub struct AppPersistenceConfig {
    /// Path for saving/loading application UI state (the theme flag).
    pub state_path: &'static str,
}

pub struct PersistenceConfig {
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    app: AppPersistenceConfig {
        state_path: ".qf_state.json",
    },
};

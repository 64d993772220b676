use std::path::PathBuf;

/// UI state outside the viewport session itself.
#[derive(Default)]
pub struct UIState {
    pub file_path: Option<PathBuf>,

    /// Bumped on every load request; loader results carrying an older
    /// generation lost the race and are dropped.
    pub load_generation: u64,
    pub loading: bool,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}

use cucumber::World;

#[derive(Default, World)]
pub struct TasksplitWorld {
    pub parent_body: Option<String>,
    pub triggered_from_issue: bool,
    pub failing_titles: Vec<String>,
    pub reject_update: bool,
    pub expected_update: Option<String>,
    pub tracker: Option<steps::RecordingTracker>,
    pub captured_output: Vec<u8>,
    pub output_file: Option<std::path::PathBuf>,
    pub run_result: Option<Result<tasksplit::split::SplitOutcome, anyhow::Error>>,
    pub server: Option<mockito::ServerGuard>,
    pub mocks: Vec<mockito::Mock>,
}

impl std::fmt::Debug for TasksplitWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TasksplitWorld")
            .field("parent_body", &self.parent_body)
            .field("triggered_from_issue", &self.triggered_from_issue)
            .field("failing_titles", &self.failing_titles)
            .field("run_result", &self.run_result)
            .finish_non_exhaustive()
    }
}

#[tokio::main]
async fn main() {
    TasksplitWorld::run("features").await;
}

use std::sync::{Arc, Mutex};

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Records the level of every event emitted while `run` executes.
pub fn capture_levels<T>(run: impl FnOnce() -> T) -> (T, Vec<Level>) {
    let levels = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(LevelRecorder { levels: Arc::clone(&levels) });
    let result = tracing::subscriber::with_default(subscriber, run);
    let levels = levels.lock().unwrap().clone();
    (result, levels)
}

struct LevelRecorder {
    levels: Arc<Mutex<Vec<Level>>>,
}

impl<S: Subscriber> Layer<S> for LevelRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.levels.lock().unwrap().push(*event.metadata().level());
    }
}

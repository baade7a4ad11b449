// src/poll/executor.rs
use std::thread;

pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Runs a fetch job somewhere other than (or, for tests, on) the caller.
pub trait Executor {
    fn execute(&self, job: Job);
}

/// One detached worker thread per job.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadExecutor;

impl Executor for ThreadExecutor {
    fn execute(&self, job: Job) {
        let spawned = thread::Builder::new()
            .name(s!("price-fetch"))
            .spawn(job);
        // The job is gone with the error; the controller sees the closed channel
        if let Err(e) = spawned {
            loge!("Worker: spawn failed: {}", e);
        }
    }
}

/// Runs the job right away on the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct InlineExecutor;

impl Executor for InlineExecutor {
    fn execute(&self, job: Job) {
        job();
    }
}

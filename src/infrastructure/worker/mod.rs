//! Background Workers

mod gc_worker;

pub use gc_worker::{AudioGcWorker, AudioGcWorkerConfig};

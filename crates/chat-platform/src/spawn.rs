//! Task spawner adapter over `wasm_bindgen_futures::spawn_local`.

use chat_core::ports::{LocalTask, SpawnPort};

pub struct LocalSpawner;

impl SpawnPort for LocalSpawner {
    fn spawn(&self, task: LocalTask) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

pub mod draft;
pub mod ids;
pub mod script;
pub mod task_store;

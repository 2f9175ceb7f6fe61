// Draft and generated-policy persistence.
// One row per save; newest-first listing; "no draft found" is a normal
// result, not an error. Persistence failures never corrupt an in-memory
// answer set — saving is always a separate request from generating.

pub mod handlers;
pub mod store;

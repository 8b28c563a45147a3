pub mod app_state_builder;
pub mod in_memory_topic_store;
pub mod stubs;
pub mod topic_test_fixtures;

#[cfg(test)]
pub fn load_test_env() {
    dotenvy::from_filename(".env.test").ok();
}

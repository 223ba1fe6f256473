use uuid::Uuid;

/// Allocate a globally unique component/page id (UUID v4)
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Sequential ID generator scoped to a seed.
///
/// Ids are only unique within one generator, so this is meant for static
/// content such as template definitions, which are always re-id'd with
/// [`generate_id`] before entering a live forest.
#[derive(Clone, Debug)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

// NexusLinks services
// Services are stateless helpers or single-purpose engines used by the app core.

pub mod favicon;
pub mod settings_engine;

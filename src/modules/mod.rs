// Bounded contexts
pub mod detail; // Detail screen content (local first, remote fallback)
pub mod favorites; // Saved favorites and transient search cache
pub mod media; // Media items shared by every context
pub mod provider; // Pixabay API access
pub mod search; // Paged image search sessions

pub mod snapshot;

pub use snapshot::{layer_activations, LayerSnapshot, NetworkSnapshot};

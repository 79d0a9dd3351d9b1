pub mod body;
pub mod config;
pub mod consts;
pub mod integrator;
pub mod registry;
pub mod render;
pub mod scenario;
pub mod state;
pub mod trail;
pub mod ui;

pub use body::Body;
pub use config::{Config, ConfigError};
pub use integrator::{pairs, Integrator};
pub use registry::{BodyId, BodyRegistry};
pub use trail::Trail;

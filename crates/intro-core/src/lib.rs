pub mod constants;
pub mod flyby;
pub mod hyperspace;
pub mod particles;
pub mod reveal;
pub mod starfield;
pub mod surface;
pub mod timeline;
pub mod viewport;

pub use flyby::*;
pub use hyperspace::*;
pub use particles::*;
pub use reveal::*;
pub use starfield::*;
pub use surface::*;
pub use timeline::*;
pub use viewport::*;

pub mod feedback;
pub mod mock;
pub mod outcome;
pub mod parser;
pub mod plan;
pub mod profile;
pub mod session;
pub mod transcript;
pub mod video;

pub use feedback::*;
pub use mock::*;
pub use outcome::*;
pub use parser::*;
pub use plan::*;
pub use profile::*;
pub use session::*;
pub use transcript::*;
pub use video::*;

//! Interactive shell around [`modexp_core`].

mod banner;
mod chart;
mod input;
mod logger;
mod session;
mod style;

pub use banner::write_banner;
pub use chart::Chart;
pub use input::{parse_input, parse_line, Input, InputError, QUIT_SENTINEL};
pub use logger::{init_logger, LoggerGuard};
pub use session::Session;
pub use style::{Painted, Palette};

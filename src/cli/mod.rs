pub mod display;
pub mod interface;

pub use display::print_all;
pub use interface::CLI;

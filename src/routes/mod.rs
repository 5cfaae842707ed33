mod health_check;
mod hello;

pub use health_check::*;
pub use hello::*;

mod decide;
mod strategies;

pub use decide::Decide;
pub use strategies::Strategies;

mod bar;
mod interval;
mod pair;
mod ticker;
mod timestamp;

pub use bar::{Bar, BarSeries};
pub use interval::Interval;
pub use pair::Pair;
pub use ticker::{Ticker, TickerMap};
pub use timestamp::UtcDateTime;

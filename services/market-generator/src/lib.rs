//! Market Generator
//!
//! Synthetic stock market sessions:
//! - Companies with randomized open/high/close prices and market caps
//! - Market weight per company, assigned once all caps are known
//! - A session step that shifts every company's capital and reports the
//!   market movement in points on a 100 baseline

pub mod generator;
pub mod pricing;
pub mod session;
pub mod stock;

pub use generator::{FakeCompanyNames, MarketGenerator, NameSource, generate_companies};
pub use pricing::{derive_symbol, generate_price};
pub use session::{MarketSession, apply_shifts, apply_uniform_shift, simulate_session};
pub use stock::{CompanyStock, GeneratedMarket};
pub use synthq_common::{DatasetError, DatasetResult};

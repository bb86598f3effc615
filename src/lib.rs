//! holiday_dash
//!
//! A small dashboard library: greet a random IPv4 address in its local language, list
//! the countries known to the Nager.Date holiday API, and chart how many public
//! holidays the selected country had over the last 11 years. Pairs with the
//! `holiday-dash` CLI and the `holiday-dash-gui` desktop app.
//!
//! ### Features
//! - Random IPv4 generation
//! - Blocking clients for the greeting and holiday APIs, memoized per session
//! - 11-year holiday count series with CSV/JSON export and summary statistics
//! - SVG/PNG line charts of the series
//!
//! ### Example
//! ```no_run
//! use holiday_dash::{Dashboard, Session};
//!
//! let session = Session::default();
//! let page = Dashboard::new(&session).render(Some("DE"), true)?;
//! println!("{}", page.greeting);
//! if let Some(series) = &page.series {
//!     holiday_dash::storage::save_csv(series, "holidays_de.csv")?;
//!     holiday_dash::viz::plot_holidays(series, "holidays_de.svg", 1000, 600)?;
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod dashboard;
pub mod holidays;
pub mod ip;
pub mod models;
pub mod session;
pub mod stats;
pub mod storage;
pub mod viz;

pub use api::{ApiError, Client};
pub use config::Config;
pub use dashboard::{Dashboard, Page};
pub use models::{Country, HolidaySeries};
pub use session::Session;

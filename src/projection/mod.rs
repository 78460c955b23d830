//! Balance projector for single accounts and portfolio chart series

mod rows;
mod projector;

pub use rows::{PortfolioMonth, Projection, ProjectionMonth};
pub use projector::{
    project_account, project_portfolio, DEFAULT_PROJECTION_TERM_MONTHS, PORTFOLIO_CHART_MONTHS,
};

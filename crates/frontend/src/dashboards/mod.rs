pub mod d001_overview;

pub use d001_overview::ui::summary::OverviewSummary;

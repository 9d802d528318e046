pub mod content_area;
pub mod dashboard_layout;

pub use content_area::ContentArea;
pub use dashboard_layout::DashboardLayout;

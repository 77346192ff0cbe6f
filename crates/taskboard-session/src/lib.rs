pub mod notice;
pub mod session;

pub use notice::Notice;
pub use session::{BoardSession, ReconcileOutcome};

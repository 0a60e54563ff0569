pub use zonelife_core::{Simulation, StepReport, ZoneLogic};
pub use zonelife_data::{Cell, CellView, Zone};
pub mod config {
    pub use zonelife_core::config::*;
}
pub mod controller {
    pub use zonelife_core::controller::*;
}
pub mod grid {
    pub use zonelife_core::grid::*;
}
pub mod rules {
    pub use zonelife_core::rules::*;
}
pub mod revival {
    pub use zonelife_core::revival::*;
}
pub mod stepper {
    pub use zonelife_core::stepper::*;
}

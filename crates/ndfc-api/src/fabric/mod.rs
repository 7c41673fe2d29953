//! Fabric business objects.

mod detail;

pub use detail::{FabricDetailGet, FabricDetails};

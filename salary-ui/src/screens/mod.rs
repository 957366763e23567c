mod breakdown;

pub use breakdown::BreakdownScreen;

pub mod cache;
pub mod irq;

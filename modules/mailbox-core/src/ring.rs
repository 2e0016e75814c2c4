mod slot_ring;

pub use slot_ring::SlotRing;

mod park_thread_queue;
mod park_wait_node;
mod park_wait_primitive;

pub use park_thread_queue::ParkThreadQueue;
pub use park_wait_node::ParkWaitNode;
pub use park_wait_primitive::ParkWaitPrimitive;

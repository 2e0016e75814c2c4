mod thread_queue;
mod wait_policy;
mod wait_primitive;
mod wake_reason;

pub use thread_queue::ThreadQueue;
pub use wait_policy::WaitPolicy;
pub use wait_primitive::WaitPrimitive;
pub use wake_reason::WakeReason;

pub mod employee;
pub mod event;
pub mod event_list;
pub mod service;

pub use employee::{Employee, IdentityKey, NewEmployee};
pub use event::Event;
pub use event_list::EventList;
pub use service::Service;

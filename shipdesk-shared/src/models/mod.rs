pub mod customer;
pub mod events;
pub mod order;
pub mod row;
pub mod tags;

//! Value objects, aggregates and their builders

#[macro_use]
mod macros;

pub mod candle;
pub mod delivery;
pub mod employee;
pub mod invoice;
pub mod manufacture;
pub mod order;
pub mod order_item;
pub mod retail_store;
pub mod value_objects;

pub use candle::{Candle, CandleBuilder};
pub use delivery::{Delivery, DeliveryBuilder, DeliveryStatus};
pub use employee::{
    BaseFields, Employee, EmployeeBuilder, EmployeeRecord, Manager, ManagerBuilder, ManagerFields,
    Personnel, StaffEmployee, StaffEmployeeBuilder, StaffFields,
};
pub use invoice::{Invoice, InvoiceBuilder};
pub use manufacture::{Manufacture, ManufactureBuilder};
pub use order::{Order, OrderBuilder, OrderStatus};
pub use order_item::{OrderItem, OrderItemBuilder};
pub use retail_store::{RetailStore, RetailStoreBuilder};
pub use value_objects::{
    Address, AddressBuilder, ContactDetails, ContactDetailsBuilder, PersonInfo, PersonInfoBuilder,
};

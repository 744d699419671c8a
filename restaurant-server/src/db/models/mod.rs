//! Database Models

// Catalog
pub mod food;
pub mod menu;

// Location
pub mod dining_table;

// Orders
pub mod invoice;
pub mod order;
pub mod order_item;

// Auth
pub mod user;

// Re-exports
pub use dining_table::{DiningTable, DiningTableCreate, DiningTableUpdate};
pub use food::{Food, FoodCreate, FoodUpdate};
pub use invoice::{
    Invoice, InvoiceCreate, InvoiceUpdate, InvoiceView, PaymentMethod, PaymentStatus,
};
pub use menu::{Menu, MenuCreate, MenuUpdate};
pub use order::{Order, OrderCreate, OrderUpdate};
pub use order_item::{
    OrderItem, OrderItemCreate, OrderItemPack, OrderItemPackCreated, OrderItemUpdate, Quantity,
};
pub use user::{LoginRequest, SignUpRequest, User, UserPage, UserResponse};

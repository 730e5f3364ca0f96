pub mod category;
pub mod dining_table;
pub mod order;
pub mod order_address;
pub mod order_item;
pub mod product;

pub mod roster_ops;
pub mod group_ops;
pub mod security_list_ops;

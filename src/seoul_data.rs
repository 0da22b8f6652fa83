pub mod api;
pub mod district;
pub mod dto;

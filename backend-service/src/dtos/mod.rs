pub mod items;

pub use items::{
    CreateItemRequest, DeleteItemResponse, ListItemsQuery, ListItemsResponse, UpdateItemRequest,
};

//! Item Endpoints

use super::{ApiClient, ApiRequest, Transport};
use crate::error::ApiResult;
use crate::models::{Item, ItemList};

pub const ITEMS_PATH: &str = "/api/items";

impl<T: Transport> ApiClient<T> {
    /// `GET /api/items`, unwrapped from its `{ items }` envelope
    pub async fn fetch_items(&self) -> ApiResult<Vec<Item>> {
        let response = self.send(ApiRequest::get(ITEMS_PATH)).await?;
        let list: ItemList = response.json("fetch items")?;
        Ok(list.items)
    }
}

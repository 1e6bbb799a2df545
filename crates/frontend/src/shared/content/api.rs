use crate::shared::api_utils::{self, SendMethod};
use contracts::shared::api::SavedResponse;
use contracts::shared::classification::Classification;
use contracts::shared::content::ContentItem;
use contracts::shared::pricing::Pricing;

fn item_path<T: ContentItem>(id: &str) -> String {
    format!("{}/{}", T::api_path(), id)
}

pub async fn fetch_list<T: ContentItem>() -> Result<Vec<T>, String> {
    api_utils::get_json(&T::api_path()).await
}

pub async fn fetch_by_id<T: ContentItem>(id: &str) -> Result<T, String> {
    api_utils::get_json(&item_path::<T>(id)).await
}

/// Создание или обновление основной информации (upsert по `id` в DTO)
pub async fn save_basic<T: ContentItem>(dto: &T::BasicDto) -> Result<SavedResponse, String> {
    api_utils::send_json(SendMethod::Post, &T::api_path(), dto).await
}

pub async fn save_pricing<T: ContentItem>(id: &str, pricing: &Pricing) -> Result<SavedResponse, String> {
    api_utils::send_json(SendMethod::Put, &format!("{}/pricing", item_path::<T>(id)), pricing).await
}

pub async fn save_classification<T: ContentItem>(
    id: &str,
    classification: &Classification,
) -> Result<SavedResponse, String> {
    api_utils::send_json(
        SendMethod::Put,
        &format!("{}/classification", item_path::<T>(id)),
        classification,
    )
    .await
}

pub async fn delete<T: ContentItem>(id: &str) -> Result<(), String> {
    api_utils::delete(&item_path::<T>(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a008_test_series::TestSeries;

    #[test]
    fn test_item_path() {
        assert_eq!(item_path::<TestSeries>("42"), "/api/test-series/42");
    }
}

use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

pub const QUESTIONS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, Default, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number; anything that is not an integer reads as page 1.
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(1)
    }
}

/// Returns the items of `page` (1-based), `per_page` at a time.
///
/// Pages below 1 and pages past the end come back empty.
pub fn paginate<T>(items: Vec<T>, page: i64, per_page: usize) -> Vec<T> {
    if page < 1 || per_page == 0 {
        return Vec::new();
    }
    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|index| index.checked_mul(per_page));

    match start {
        Some(start) if start < items.len() => {
            items.into_iter().skip(start).take(per_page).collect()
        }
        _ => Vec::new(),
    }
}
